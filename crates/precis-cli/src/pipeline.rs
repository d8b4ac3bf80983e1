//! The request pipeline: prompt → model → tool call → extraction → JSON.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use precis_domain::traits::LlmProvider;
use precis_domain::{ErrorReport, SummaryReport};
use precis_extract::{char_prefix, extract_document, ExtractConfig, ExtractError};
use precis_intent::{parse_tool_call, PromptBuilder, SummarizeRequest};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info};

/// One linear pass over a request.
///
/// Holds the LLM provider and the knobs derived from config. Produces the
/// serialized JSON response; response-level failures (no function call,
/// file not found, unsupported extension) come back as `Ok` with a
/// status:"error" record, infrastructure failures as `Err`.
pub struct Pipeline<L>
where
    L: LlmProvider,
{
    llm: Arc<L>,
    extract_config: ExtractConfig,
    preview_length: usize,
    model_timeout: Duration,
    formatter: Formatter,
}

impl<L> Pipeline<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a pipeline from a provider and the loaded config.
    pub fn new(llm: L, config: &Config, formatter: Formatter) -> Self {
        Self {
            llm: Arc::new(llm),
            extract_config: config.extract_config(),
            preview_length: config.summary.preview_length,
            model_timeout: config.model.timeout(),
            formatter,
        }
    }

    /// Run a natural-language request end to end.
    pub async fn run_prompt(&self, user_text: &str) -> Result<String> {
        let prompt = PromptBuilder::new(user_text).build()?;
        debug!("Prompt length: {} chars", prompt.len());

        let response = self.call_model(&prompt).await?;
        debug!("Model response length: {} chars", response.len());

        let request = match parse_tool_call(&response)
            .and_then(|call| SummarizeRequest::from_call(&call))
        {
            Ok(request) => request,
            Err(e) => {
                info!("Intent failure: {}", e);
                return self.formatter.render(&ErrorReport::new(e.to_string()));
            }
        };

        self.summarize(&request)
    }

    /// Execute a summarize request against the filesystem.
    pub fn summarize(&self, request: &SummarizeRequest) -> Result<String> {
        let path = Path::new(&request.file_path);

        match extract_document(path, &self.extract_config) {
            Ok(doc) => {
                let preview = char_prefix(&doc.text, self.preview_length);
                let report = SummaryReport::new(
                    &request.file_path,
                    request.tone,
                    doc.word_count,
                    doc.char_count,
                    preview,
                );
                self.formatter.render(&report)
            }
            Err(e @ ExtractError::FileNotFound(_))
            | Err(e @ ExtractError::UnsupportedExtension(_))
            | Err(e @ ExtractError::Parse { .. }) => {
                info!("Extraction failure: {}", e);
                self.formatter.render(
                    &ErrorReport::new(e.to_string()).with_file_path(&request.file_path),
                )
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Call the LLM provider with the overall request timeout.
    async fn call_model(&self, prompt: &str) -> Result<String> {
        let llm = Arc::clone(&self.llm);
        let prompt = prompt.to_string();

        // The provider trait is blocking; dispatch off the async runtime
        let generate = tokio::task::spawn_blocking(move || {
            llm.generate(&prompt)
                .map_err(|e| CliError::Llm(e.to_string()))
        });

        match timeout(self.model_timeout, generate).await {
            Err(_) => Err(CliError::Timeout),
            Ok(joined) => {
                joined.map_err(|e| CliError::Llm(format!("Task join error: {}", e)))?
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use precis_llm::MockProvider;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    fn test_pipeline(mock: MockProvider) -> Pipeline<MockProvider> {
        let config = Config::default();
        Pipeline::new(mock, &config, Formatter::new(false, false))
    }

    fn call_response(file_path: &str, tone: &str) -> String {
        format!(
            "<start_function_call>call:summarize_document{{file_path:<escape>{}<escape>,tone:{}}}<end_function_call>",
            file_path, tone
        )
    }

    #[tokio::test]
    async fn test_end_to_end_success() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "alpha beta gamma delta").unwrap();

        let mock = MockProvider::new(call_response(&path.display().to_string(), "Casual"));
        let pipeline = test_pipeline(mock);

        let output = pipeline.run_prompt("summarize my notes casually").await.unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["tone"], "Casual");
        assert_eq!(json["meta"]["word_count"], 4);
        assert_eq!(json["meta"]["char_count"], 22);
        assert_eq!(json["summary"]["intro"], "Hey! Here's the gist:");
        assert_eq!(json["summary"]["preview_text"], "alpha beta gamma delta");
    }

    #[tokio::test]
    async fn test_preview_is_bounded_prefix() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("long.txt");
        fs::write(&path, "word ".repeat(300)).unwrap();

        let mock = MockProvider::new(call_response(&path.display().to_string(), "Normal"));
        let mut config = Config::default();
        config.summary.preview_length = 10;
        let pipeline = Pipeline::new(mock, &config, Formatter::new(false, false));

        let output = pipeline.run_prompt("summarize").await.unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        let preview = json["summary"]["preview_text"].as_str().unwrap();
        assert_eq!(preview, "word word ");
        assert_eq!(preview.chars().count(), 10);
    }

    #[tokio::test]
    async fn test_no_function_call() {
        let mock = MockProvider::new("I'm sorry, I can't do that.");
        let pipeline = test_pipeline(mock);

        let output = pipeline.run_prompt("what's the weather?").await.unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "No function call detected.");
        assert!(json.get("summary").is_none());
    }

    #[tokio::test]
    async fn test_unknown_function() {
        let mock = MockProvider::new(
            "<start_function_call>call:delete_document{file_path:<escape>x.txt<escape>}<end_function_call>",
        );
        let pipeline = test_pipeline(mock);

        let output = pipeline.run_prompt("delete x.txt").await.unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["status"], "error");
        assert!(json["message"]
            .as_str()
            .unwrap()
            .contains("Unknown function"));
    }

    #[tokio::test]
    async fn test_missing_file_error_record() {
        let mock = MockProvider::new(call_response("/nowhere/missing.pdf", "Formal"));
        let pipeline = test_pipeline(mock);

        let output = pipeline.run_prompt("summarize missing.pdf").await.unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["status"], "error");
        assert!(json["message"].as_str().unwrap().contains("File not found"));
        assert_eq!(json["file_path"], "/nowhere/missing.pdf");
        assert!(json.get("summary").is_none());
    }

    #[tokio::test]
    async fn test_unsupported_extension_error_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "a,b,c").unwrap();

        let mock = MockProvider::new(call_response(&path.display().to_string(), "Normal"));
        let pipeline = test_pipeline(mock);

        let output = pipeline.run_prompt("summarize data.csv").await.unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["status"], "error");
        assert!(json["message"]
            .as_str()
            .unwrap()
            .contains("Unsupported extension"));
    }

    #[tokio::test]
    async fn test_unrecognized_tone_defaults_to_normal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "content").unwrap();

        let mock = MockProvider::new(call_response(&path.display().to_string(), "sarcastic"));
        let pipeline = test_pipeline(mock);

        let output = pipeline.run_prompt("summarize sarcastically").await.unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["tone"], "Normal");
        assert_eq!(json["summary"]["intro"], "Here is a summary:");
    }

    #[tokio::test]
    async fn test_provider_failure_is_infrastructure_error() {
        let mut mock = MockProvider::default();
        // Error for every prompt the builder produces
        let prompt = precis_intent::PromptBuilder::new("boom").build().unwrap();
        mock.add_error(prompt);
        let pipeline = test_pipeline(mock);

        let result = pipeline.run_prompt("boom").await;
        assert!(matches!(result, Err(CliError::Llm(_))));
    }
}
