//! Authored settlement data and the process-wide table built from it.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
