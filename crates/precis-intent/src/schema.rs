//! Tool schema and the typed summarize request

use crate::error::IntentError;
use crate::parser::ToolCall;
use precis_domain::Tone;
use serde::Serialize;
use std::collections::BTreeMap;

/// Name of the single function precis exposes to the model
pub const SUMMARIZE_FUNCTION: &str = "summarize_document";

/// A tool definition as advertised to the model
///
/// Serializes to the OpenAI-style function schema the model was tuned on:
///
/// ```json
/// { "type": "function", "function": { "name": ..., "parameters": ... } }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    /// Always `"function"`
    #[serde(rename = "type")]
    pub kind: &'static str,

    /// The function definition
    pub function: FunctionSpec,
}

/// Function name, description and parameter schema
#[derive(Debug, Clone, Serialize)]
pub struct FunctionSpec {
    /// Function name the model must call
    pub name: &'static str,

    /// One-line description shown to the model
    pub description: &'static str,

    /// JSON-schema style parameter object
    pub parameters: ParametersSpec,
}

/// Parameter object schema
#[derive(Debug, Clone, Serialize)]
pub struct ParametersSpec {
    /// Always `"object"`
    #[serde(rename = "type")]
    pub kind: &'static str,

    /// Named parameters
    pub properties: BTreeMap<&'static str, PropertySpec>,

    /// Names of required parameters
    pub required: Vec<&'static str>,
}

/// A single parameter schema
#[derive(Debug, Clone, Serialize)]
pub struct PropertySpec {
    /// JSON type name
    #[serde(rename = "type")]
    pub kind: &'static str,

    /// Closed set of accepted values, when applicable
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<&'static str>>,
}

/// The `summarize_document` tool definition
pub fn summarize_tool() -> ToolSpec {
    let mut properties = BTreeMap::new();
    properties.insert(
        "file_path",
        PropertySpec {
            kind: "string",
            allowed: None,
        },
    );
    properties.insert(
        "tone",
        PropertySpec {
            kind: "string",
            allowed: Some(Tone::names().to_vec()),
        },
    );

    ToolSpec {
        kind: "function",
        function: FunctionSpec {
            name: SUMMARIZE_FUNCTION,
            description: "Summarizes a document file with a specific tone.",
            parameters: ParametersSpec {
                kind: "object",
                properties,
                required: vec!["file_path"],
            },
        },
    }
}

/// Typed form of a parsed `summarize_document` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeRequest {
    /// Path of the document to summarize
    pub file_path: String,

    /// Requested tone; unrecognized values fall back to Normal
    pub tone: Tone,
}

impl SummarizeRequest {
    /// Interpret a parsed tool call as a summarize request
    ///
    /// # Errors
    ///
    /// - `UnknownFunction` if the model called anything else
    /// - `MissingArgument` if `file_path` was absent
    pub fn from_call(call: &ToolCall) -> Result<Self, IntentError> {
        if call.name != SUMMARIZE_FUNCTION {
            return Err(IntentError::UnknownFunction(call.name.clone()));
        }

        let file_path = call
            .arg("file_path")
            .ok_or(IntentError::MissingArgument("file_path"))?
            .to_string();

        let tone = call
            .arg("tone")
            .map(Tone::parse_or_default)
            .unwrap_or_default();

        Ok(Self { file_path, tone })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_shape() {
        let tool = summarize_tool();
        let json = serde_json::to_value(&tool).unwrap();

        assert_eq!(json["type"], "function");
        assert_eq!(json["function"]["name"], "summarize_document");
        assert_eq!(json["function"]["parameters"]["type"], "object");
        assert_eq!(
            json["function"]["parameters"]["properties"]["file_path"]["type"],
            "string"
        );
        assert_eq!(json["function"]["parameters"]["required"][0], "file_path");

        let tones = json["function"]["parameters"]["properties"]["tone"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(tones.len(), 4);
    }

    #[test]
    fn test_request_from_call() {
        let mut call = ToolCall::new(SUMMARIZE_FUNCTION);
        call.set_arg("file_path", "report.pdf");
        call.set_arg("tone", "formal");

        let request = SummarizeRequest::from_call(&call).unwrap();
        assert_eq!(request.file_path, "report.pdf");
        assert_eq!(request.tone, Tone::Formal);
    }

    #[test]
    fn test_request_defaults_tone() {
        let mut call = ToolCall::new(SUMMARIZE_FUNCTION);
        call.set_arg("file_path", "notes.txt");

        let request = SummarizeRequest::from_call(&call).unwrap();
        assert_eq!(request.tone, Tone::Normal);
    }

    #[test]
    fn test_request_unknown_tone_defaults() {
        let mut call = ToolCall::new(SUMMARIZE_FUNCTION);
        call.set_arg("file_path", "notes.txt");
        call.set_arg("tone", "sarcastic");

        let request = SummarizeRequest::from_call(&call).unwrap();
        assert_eq!(request.tone, Tone::Normal);
    }

    #[test]
    fn test_request_rejects_unknown_function() {
        let call = ToolCall::new("delete_document");
        let result = SummarizeRequest::from_call(&call);
        assert!(matches!(result, Err(IntentError::UnknownFunction(_))));
    }

    #[test]
    fn test_request_requires_file_path() {
        let call = ToolCall::new(SUMMARIZE_FUNCTION);
        let result = SummarizeRequest::from_call(&call);
        assert!(matches!(
            result,
            Err(IntentError::MissingArgument("file_path"))
        ));
    }
}
