//! Store error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the persistence layer
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read or write failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Points blob could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Persisted data is malformed (non-numeric points cell, bad header)
    #[error("Corrupt data in {path:?}: {detail}")]
    Corruption { path: PathBuf, detail: String },
}

impl From<bincode::Error> for StoreError {
    fn from(err: bincode::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
