use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("Browser local storage is not available: {0}")]
    Unavailable(String),
    #[error("Failed to serialize value for key {key}: {reason}")]
    Serialize { key: String, reason: String },
    #[error("Failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
}
