//! Settlement model and lookup table. Keep this crate free of IO and platform concerns.

pub mod hand;
pub mod locale;
pub mod scenario;
pub mod settlement;
pub mod table;

pub use hand::*;
pub use locale::*;
pub use scenario::*;
pub use settlement::*;
pub use table::*;
