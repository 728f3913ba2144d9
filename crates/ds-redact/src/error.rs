//! Error types for the redaction engine.

use thiserror::Error;

/// Result type for redaction operations.
pub type Result<T> = std::result::Result<T, RedactError>;

/// Errors that can occur while building or loading a redaction setup.
///
/// Redaction itself never fails: a message with no matching segment
/// passes through unchanged.
#[derive(Error, Debug)]
pub enum RedactError {
    /// Invalid combination of field set, token, and separator.
    #[error("config error: {0}")]
    Config(String),

    /// Failed to compile the segment pattern.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// I/O error while reading or writing a config file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error while parsing or serializing a config file.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
