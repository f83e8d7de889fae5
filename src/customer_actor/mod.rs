//! Customer records. Plain create/lookup, no analytics.

pub mod entity;
pub mod error;

pub use error::*;
