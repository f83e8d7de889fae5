use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Order validation error: {0}")]
    ValidationError(String),
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
    #[error("Order storage error: {0}")]
    StorageError(String),
}

impl OrderError {
    /// The detail message without the variant prefix.
    pub fn into_message(self) -> String {
        match self {
            OrderError::NotFound(msg)
            | OrderError::ValidationError(msg)
            | OrderError::InvalidPeriod(msg)
            | OrderError::StorageError(msg) => msg,
        }
    }
}

impl From<FrameworkError> for OrderError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::Rejected(reason) | FrameworkError::Conflict(reason) => {
                OrderError::ValidationError(reason)
            }
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                OrderError::StorageError(err.to_string())
            }
        }
    }
}
