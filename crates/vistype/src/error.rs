//! Error types for the vistype library.
//!
//! Classification itself never fails. These errors come from loading
//! datasets and validating configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for vistype operations.
#[derive(Debug, Error)]
pub enum VistypeError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record could not be scalarised into raw cell values.
    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Input holds more rows than the loader accepts.
    #[error("Input has {rows} rows, exceeding the limit of {limit}")]
    TooManyRows { rows: usize, limit: usize },

    /// Empty input where data was required.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for vistype operations.
pub type Result<T> = std::result::Result<T, VistypeError>;
