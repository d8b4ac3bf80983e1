//! Prompt construction for the function-calling model

use crate::error::IntentError;
use crate::schema::{summarize_tool, ToolSpec};
use precis_domain::Tone;

/// Builds the prompt handed to the LLM
///
/// The prompt carries the developer instruction, the advertised tools as
/// JSON, the expected wire format, and the user's request.
pub struct PromptBuilder {
    user_prompt: String,
    tools: Vec<ToolSpec>,
}

impl PromptBuilder {
    /// Create a prompt builder for a user request, advertising the
    /// `summarize_document` tool
    pub fn new(user_prompt: impl Into<String>) -> Self {
        Self {
            user_prompt: user_prompt.into(),
            tools: vec![summarize_tool()],
        }
    }

    /// Replace the advertised tools
    pub fn with_tools(mut self, tools: Vec<ToolSpec>) -> Self {
        self.tools = tools;
        self
    }

    /// Build the complete prompt
    pub fn build(&self) -> Result<String, IntentError> {
        let tools_json = serde_json::to_string_pretty(&self.tools)?;

        let mut prompt = String::new();

        // 1. Developer instruction
        prompt.push_str(DEVELOPER_INSTRUCTION);
        prompt.push_str("\n\n");

        // 2. Tool definitions
        prompt.push_str("Available tools:\n");
        prompt.push_str(&tools_json);
        prompt.push_str("\n\n");

        // 3. Wire format the parser expects back
        prompt.push_str(CALL_FORMAT_REMINDER);
        prompt.push_str("\n\n");

        // 4. The request itself
        prompt.push_str("User request:\n");
        prompt.push_str(&self.user_prompt);
        prompt.push('\n');

        Ok(prompt)
    }
}

/// Phrase a direct file+tone request the way a user would
///
/// Used by the `summarize` subcommand, which knows the file and tone up
/// front but still routes the request through the model as a function call.
pub fn summarize_request_text(file_path: &str, tone: Tone) -> String {
    format!(
        "Summarize the file at {} with a {} tone.",
        file_path,
        tone.as_str()
    )
}

const DEVELOPER_INSTRUCTION: &str = "You are a model that can do function calling.";

const CALL_FORMAT_REMINDER: &str = r#"Respond with exactly one function call and nothing else, in this format:
<start_function_call>call:FUNCTION_NAME{arg:<escape>string value<escape>,arg:bare_value}<end_function_call>

Wrap string argument values in <escape> markers."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_user_request() {
        let prompt = PromptBuilder::new("Summarize notes.md casually")
            .build()
            .unwrap();
        assert!(prompt.contains("Summarize notes.md casually"));
        assert!(prompt.contains("User request:"));
    }

    #[test]
    fn test_prompt_includes_tool_schema() {
        let prompt = PromptBuilder::new("anything").build().unwrap();
        assert!(prompt.contains("summarize_document"));
        assert!(prompt.contains("file_path"));
        assert!(prompt.contains("\"Casual\""));
    }

    #[test]
    fn test_prompt_includes_wire_format() {
        let prompt = PromptBuilder::new("anything").build().unwrap();
        assert!(prompt.contains("<start_function_call>"));
        assert!(prompt.contains("<escape>"));
    }

    #[test]
    fn test_prompt_includes_developer_instruction() {
        let prompt = PromptBuilder::new("anything").build().unwrap();
        assert!(prompt.contains("function calling"));
    }

    #[test]
    fn test_summarize_request_text() {
        let text = summarize_request_text("/docs/report.pdf", Tone::Formal);
        assert_eq!(
            text,
            "Summarize the file at /docs/report.pdf with a Formal tone."
        );
    }
}
