//! Order document behaviour inside the resource actor.

pub mod entity;
pub mod error;

pub use error::*;
