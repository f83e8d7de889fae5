//! Product catalogue logic, including SKU uniqueness.

pub mod entity;
pub mod error;

pub use error::*;
