//! Interactive settlement session over any line-oriented input and output.

pub mod normalize;
pub mod options;
pub mod session;

pub use normalize::*;
pub use options::*;
pub use session::*;
