//! The fixed-shape response record produced per invocation

use crate::tone::Tone;
use serde::{Deserialize, Serialize};

/// Successful summary response
///
/// One of these is produced per invocation and serialized to stdout:
///
/// ```json
/// {
///   "status": "success",
///   "file_path": "notes.md",
///   "tone": "Normal",
///   "meta": { "word_count": 12, "char_count": 80 },
///   "summary": { "intro": "Here is a summary:", "preview_text": "..." }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Always `"success"`
    pub status: String,

    /// Path of the summarized file, as requested
    pub file_path: String,

    /// Tone name used for the intro
    pub tone: String,

    /// Counts over the cleaned, capped text
    pub meta: FileMeta,

    /// Intro sentence and preview slice
    pub summary: SummaryBody,
}

/// Counts over the cleaned document text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMeta {
    /// Whitespace-delimited token count
    pub word_count: usize,

    /// Character count
    pub char_count: usize,
}

/// The heuristic "summary" payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryBody {
    /// Canned intro sentence selected by tone
    pub intro: String,

    /// Leading slice of the cleaned text, bounded by the preview length
    pub preview_text: String,
}

impl SummaryReport {
    /// Assemble a report from extracted text counts and a preview slice
    pub fn new(
        file_path: impl Into<String>,
        tone: Tone,
        word_count: usize,
        char_count: usize,
        preview_text: impl Into<String>,
    ) -> Self {
        Self {
            status: "success".to_string(),
            file_path: file_path.into(),
            tone: tone.as_str().to_string(),
            meta: FileMeta {
                word_count,
                char_count,
            },
            summary: SummaryBody {
                intro: tone.intro().to_string(),
                preview_text: preview_text.into(),
            },
        }
    }
}

/// Error response
///
/// Used for request-level failures (file not found, unsupported
/// extension) as well as intent failures; carries no summary field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Always `"error"`
    pub status: String,

    /// Human-readable reason
    pub message: String,

    /// Offending file path, when one was resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl ErrorReport {
    /// Create an error report with no file context
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            file_path: None,
        }
    }

    /// Attach the offending file path
    pub fn with_file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }
}
