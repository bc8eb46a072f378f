//! Error types for the storage layer.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database error from DuckDB.
    #[error("database error: {0}")]
    Database(#[from] duckdb::Error),

    /// The store could not be opened at startup.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A previous holder of the connection lock panicked.
    #[error("connection lock poisoned")]
    LockPoisoned,

    /// A stored row could not be mapped back to a pet.
    #[error("invalid data: {0}")]
    InvalidData(String),
}
