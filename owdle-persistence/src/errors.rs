#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage is unavailable")]
    Unavailable,
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Stored data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
