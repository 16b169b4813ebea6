/// Accounts application error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AccountsError>;

#[derive(Debug, Error)]
pub enum AccountsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Core error: {0}")]
    Core(#[from] pitstop_core::PitstopError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<pitstop_storage::StorageError> for AccountsError {
    fn from(err: pitstop_storage::StorageError) -> Self {
        // Convert StorageError -> PitstopError -> AccountsError
        AccountsError::Core(err.into())
    }
}
