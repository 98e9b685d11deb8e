//! Error types for the Pattern Index.

use thiserror::Error;

/// Result type alias for pattern-index operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the Pattern Index.
#[derive(Error, Debug)]
pub enum Error {
    // Extraction errors (10-19)
    #[error("not a pattern file: {0}")]
    NotAPatternFile(String),

    #[error("malformed pattern content in {file}: {reason}")]
    MalformedContent { file: String, reason: String },

    // I/O errors (20-29)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the stable error code for this error type.
    /// Used for detailed error reporting in structured output.
    pub fn code(&self) -> u32 {
        match self {
            Error::NotAPatternFile(_) => 10,
            Error::MalformedContent { .. } => 11,
            Error::Io(_) => 20,
            Error::Json(_) => 21,
        }
    }
}
