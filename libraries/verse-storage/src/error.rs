/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Failures reading, writing, or deleting persisted state.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection error
    #[error("database connection error: {0}")]
    Connection(String),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(String),

    /// A persisted record could not be interpreted
    #[error("corrupt record: {0}")]
    Corrupt(String),

    /// Database error from SQLx
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
