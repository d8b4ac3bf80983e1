//! Error types for the extraction layer

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during document extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The named file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The file extension maps to no known reader
    #[error("Unsupported extension: {0}")]
    UnsupportedExtension(String),

    /// A format-specific reader failed on the file contents
    #[error("Failed to parse {kind} document: {reason}")]
    Parse {
        /// Document family that failed
        kind: &'static str,
        /// Underlying reader error
        reason: String,
    },

    /// I/O error while reading the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
