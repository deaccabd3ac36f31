/// Errors from version store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A version with the same slug and number already exists.
    #[error("version {version} of {slug} already exists")]
    DuplicateVersion { slug: String, version: u32 },

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error while reading an archive.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A lock guarding the store was poisoned by a panicking writer.
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
