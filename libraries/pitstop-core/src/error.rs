/// Core error types for Pitstop
use crate::types::UserId;
use thiserror::Error;

/// Result type alias using `PitstopError`
pub type Result<T> = std::result::Result<T, PitstopError>;

/// Core error type for Pitstop
#[derive(Error, Debug)]
pub enum PitstopError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Duplicate entry
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl PitstopError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a duplicate entry error
    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Check if this error means the user does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_))
    }
}
