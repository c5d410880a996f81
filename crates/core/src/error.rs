//! Error types for fogline operations.
//!
//! The scoring engine itself is a total function and never fails; errors
//! only arise at the I/O boundaries (fetching pages, reading lexicon files,
//! reading and writing row files).

use thiserror::Error;

/// Main error type for batch scoring operations.
#[derive(Error, Debug)]
pub enum FoglineError {
    /// HTTP request errors from reqwest.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[cfg(feature = "fetch")]
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The input batch is missing a required column or is otherwise unusable.
    #[error("Malformed input batch: {0}")]
    MalformedInput(String),

    /// Row file read/write errors from the csv layer.
    #[error("Row file error: {0}")]
    RowError(#[from] csv::Error),

    /// File I/O errors.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for FoglineError.
pub type Result<T> = std::result::Result<T, FoglineError>;
