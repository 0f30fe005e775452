//! Error types for field mapping

use thiserror::Error;

/// Field mapping error types
#[derive(Debug, Error)]
pub enum MappingError {
    /// Persisted source is not a JSON array of objects.
    #[error("Invalid input shape: {0}")]
    InvalidInput(String),
    /// I/O operation failed while reading or writing an artifact.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MappingError>;
