use std::path::PathBuf;

/// Errors from snapshot load and save.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// I/O error from the underlying storage.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot exists but is not a JSON array of score entries.
    #[error("corrupt snapshot {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Encoding the standings failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tempfile::PersistError> for PersistError {
    fn from(err: tempfile::PersistError) -> Self {
        Self::Io(err.error)
    }
}

/// Result alias for snapshot operations.
pub type PersistResult<T> = Result<T, PersistError>;
