//! Error types for keyword extraction

use thiserror::Error;

/// Error type for extraction operations
#[derive(Debug, Error)]
pub enum Error {
    /// The stopword source or another setting cannot produce a usable extractor
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input that cannot be treated as text
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reading a stopword list or input document failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, Error>;
