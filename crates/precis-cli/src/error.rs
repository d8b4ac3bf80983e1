//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
///
/// These are infrastructure failures that surface on stderr with exit code 1.
/// Response-level failures (file not found, unsupported extension, no
/// function call) are not errors here - they render as status:"error" JSON
/// on stdout.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// The model call exceeded the configured timeout
    #[error("Model call timed out")]
    Timeout,

    /// Intent layer error (prompt construction)
    #[error("Intent error: {0}")]
    Intent(#[from] precis_intent::IntentError),

    /// Extraction infrastructure error
    #[error("Extraction error: {0}")]
    Extract(#[from] precis_extract::ExtractError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
