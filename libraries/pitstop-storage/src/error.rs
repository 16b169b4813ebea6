/// Storage-specific errors
use pitstop_core::UserId;
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// No user record with this id
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// A user with this email already exists
    #[error("User already exists: {0}")]
    DuplicateEmail(String),

    /// A user with this id already exists
    #[error("User id already taken: {0}")]
    DuplicateId(UserId),

    /// Password hashing error
    #[error(transparent)]
    Hash(#[from] bcrypt::BcryptError),

    /// Serialization/deserialization error
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for pitstop_core::PitstopError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::UserNotFound(id) => pitstop_core::PitstopError::UserNotFound(id),
            StorageError::DuplicateEmail(email) => pitstop_core::PitstopError::duplicate(email),
            StorageError::DuplicateId(id) => pitstop_core::PitstopError::duplicate(id.to_string()),
            StorageError::Io(e) => pitstop_core::PitstopError::Io(e),
            other => pitstop_core::PitstopError::storage(other.to_string()),
        }
    }
}
