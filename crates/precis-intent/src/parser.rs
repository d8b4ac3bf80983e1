//! Parse model output into a structured tool call

use crate::error::IntentError;
use std::collections::BTreeMap;
use tracing::warn;

const START_MARKER: &str = "<start_function_call>";
const END_MARKER: &str = "<end_function_call>";
const CALL_PREFIX: &str = "call:";
const ESCAPE: &str = "<escape>";

/// A function call parsed from model output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCall {
    /// Function name
    pub name: String,

    /// Argument name/value pairs, all carried as strings
    pub args: BTreeMap<String, String>,
}

impl ToolCall {
    /// Create an empty call with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: BTreeMap::new(),
        }
    }

    /// Look up an argument by name
    pub fn arg(&self, name: &str) -> Option<&str> {
        self.args.get(name).map(String::as_str)
    }

    /// Set an argument value
    pub fn set_arg(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.args.insert(name.into(), value.into());
    }
}

/// Parse the first function call out of raw model output
///
/// The wire format is:
///
/// ```text
/// <start_function_call>call:NAME{key:<escape>string value<escape>,key:bare_value}<end_function_call>
/// ```
///
/// Text around the markers (special tokens, stray prose) is ignored.
/// Malformed argument fragments are skipped with a warning rather than
/// failing the whole call.
pub fn parse_tool_call(output: &str) -> Result<ToolCall, IntentError> {
    let start = output
        .find(START_MARKER)
        .ok_or(IntentError::NoFunctionCall)?;
    let after_start = &output[start + START_MARKER.len()..];

    let end = after_start
        .find(END_MARKER)
        .ok_or(IntentError::NoFunctionCall)?;
    let body = &after_start[..end];

    let body = body
        .trim()
        .strip_prefix(CALL_PREFIX)
        .ok_or(IntentError::NoFunctionCall)?;

    let open = body.find('{').ok_or(IntentError::NoFunctionCall)?;
    let close = body.rfind('}').ok_or(IntentError::NoFunctionCall)?;
    if close < open {
        return Err(IntentError::NoFunctionCall);
    }

    let name = body[..open].trim();
    if name.is_empty() {
        return Err(IntentError::NoFunctionCall);
    }

    let mut call = ToolCall::new(name);
    parse_args(&body[open + 1..close], &mut call.args);

    Ok(call)
}

/// Parse the comma-separated argument list inside the braces
///
/// Escaped values may contain commas and braces; bare values run until the
/// next comma or escape marker.
fn parse_args(args_str: &str, args: &mut BTreeMap<String, String>) {
    let mut rest = args_str;

    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ',');
        if rest.is_empty() {
            break;
        }

        let Some(colon) = rest.find(':') else {
            warn!("Skipping trailing argument fragment: {:?}", rest);
            break;
        };

        let key = rest[..colon].trim();
        rest = &rest[colon + 1..];

        let mut escaped = false;
        let value = if let Some(after) = rest.strip_prefix(ESCAPE) {
            escaped = true;
            match after.find(ESCAPE) {
                Some(end) => {
                    let value = &after[..end];
                    rest = &after[end + ESCAPE.len()..];
                    value
                }
                None => {
                    // Unterminated escape: take the remainder
                    warn!("Unterminated escape in argument '{}'", key);
                    let value = after;
                    rest = "";
                    value
                }
            }
        } else {
            let end = rest
                .find(|c| c == ',' || c == '<')
                .unwrap_or(rest.len());
            let value = rest[..end].trim();
            rest = &rest[end..];
            value
        };

        if key.is_empty() || !key.chars().all(|c| c.is_alphanumeric() || c == '_') {
            warn!("Skipping argument with invalid key: {:?}", key);
            continue;
        }

        // Escaped values take precedence: a bare re-match of a key never
        // replaces a value that arrived in escape markers
        if escaped {
            args.insert(key.to_string(), value.to_string());
        } else {
            args.entry(key.to_string())
                .or_insert_with(|| value.to_string());
        }
    }
}
