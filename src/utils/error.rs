//! Error handling for Infinity

use thiserror::Error;

/// Main error type for Infinity
#[derive(Debug, Error)]
pub enum InfinityError {
    #[error("transfer cancelled")]
    Cancelled,

    #[error("transfer failed: {0}")]
    TransferFailed(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Store error: {0}")]
    StoreError(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl InfinityError {
    /// Whether this is the expected abort raised by pause/cancel.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, InfinityError::Cancelled)
    }
}
