//! Error types for the intent layer

use thiserror::Error;

/// Errors that can occur while planning or parsing a tool call
#[derive(Error, Debug)]
pub enum IntentError {
    /// Model output contained no recognizable function call
    #[error("No function call detected.")]
    NoFunctionCall,

    /// Model called a function precis does not expose
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// A required argument was missing from the call
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// JSON serialization error while building the prompt
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for IntentError {
    fn from(e: serde_json::Error) -> Self {
        IntentError::Json(e.to_string())
    }
}
