use crate::core::client::storage::StorageError;
use crate::core::drainer::DrainError;
use thiserror::Error;

/// Result type for drainer operations
pub type DrainerResult<T> = Result<T, DrainerError>;

/// Top-level error type returned by the binary's commands.
#[derive(Error, Debug)]
pub enum DrainerError {
    #[error("Storage client error: {0}")]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Drain(#[from] DrainError),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
