use thiserror::Error;

/// Errors from key-value store operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failure in the backing format.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A lock protecting shared state was poisoned by a panicking thread.
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result alias for store operations.
pub type StorageResult<T> = Result<T, StorageError>;
