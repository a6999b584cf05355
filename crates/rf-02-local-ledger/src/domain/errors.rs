//! Error types for the Local Ledger

use thiserror::Error;

/// All errors that can occur while reading or writing local records.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying file operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Delimited export could not be written or read back
    #[error("Delimited text error: {0}")]
    Csv(#[from] csv::Error),

    /// Stored value has an unexpected shape
    #[error("Corrupted value under '{key}': {reason}")]
    Corrupted { key: String, reason: String },

    /// Store refused the write (e.g. quota exceeded)
    #[error("Quota exceeded writing '{key}': {size} bytes > {limit} bytes")]
    QuotaExceeded { key: String, size: usize, limit: usize },

    /// Key contains characters the store cannot address
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// Store lock could not be acquired
    #[error("Storage lock failed: {0}")]
    Lock(String),

    /// Export requested on an empty archive
    #[error("No messages to export")]
    NothingToExport,
}
