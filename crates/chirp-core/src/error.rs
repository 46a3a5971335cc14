//! Error types for chirp

use thiserror::Error;

/// Main error type for chirp operations.
///
/// Only configuration construction can fail; extraction, validation,
/// autolinking, and highlighting are total functions.
#[derive(Error, Debug)]
pub enum ChirpError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error (malformed JSON, invalid field values)
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for chirp operations
pub type Result<T> = std::result::Result<T, ChirpError>;
