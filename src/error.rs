// Error types for horde_model_reference.
// Covers cache directory resolution, category lookups, and URL construction.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No default cache directory is available on this platform")]
    CacheDirUnavailable,

    #[error("Unknown model reference category: {0}")]
    UnknownCategory(String),

    #[error("URL cannot take path segments: {0}")]
    NotABaseUrl(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReferenceError>;
