use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage is not available in this context")]
    Unavailable,

    #[error("Storage quota exceeded while writing {key}")]
    QuotaExceeded { key: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage backend error: {0}")]
    Backend(String),
}
