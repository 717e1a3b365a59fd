//! Unified error type for mimetree operations.
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for detection calls.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading from the byte source failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The named file could not be opened
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Catalogue or configuration (de)serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Whether this error came from the byte source rather than from the caller's setup.
    pub fn is_source_error(&self) -> bool {
        matches!(self, Error::Io(_) | Error::Open { .. })
    }
}

/// Result type for mimetree operations.
pub type Result<T> = std::result::Result<T, Error>;
