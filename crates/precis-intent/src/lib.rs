//! Precis Intent Layer
//!
//! Translates natural-language requests into a structured call against the
//! one tool precis exposes, `summarize_document`.
//!
//! # Architecture
//!
//! ```text
//! User text → PromptBuilder → LLM → parse_tool_call → SummarizeRequest
//! ```
//!
//! The model is expected to answer in a function-call wire format:
//!
//! ```text
//! <start_function_call>call:summarize_document{file_path:<escape>notes.md<escape>,tone:Formal}<end_function_call>
//! ```
//!
//! String arguments are wrapped in `<escape>` markers; bare arguments are
//! plain `key:value` pairs. Output with no such call is an intent failure,
//! not a parse panic - the caller reports it as a status:"error" record.

#![warn(missing_docs)]

mod error;
mod parser;
mod prompt;
mod schema;

pub use error::IntentError;
pub use parser::{parse_tool_call, ToolCall};
pub use prompt::{summarize_request_text, PromptBuilder};
pub use schema::{summarize_tool, SummarizeRequest, ToolSpec, SUMMARIZE_FUNCTION};
