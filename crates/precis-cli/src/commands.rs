//! Command execution handlers.

use crate::cli::{AskArgs, SummarizeArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::pipeline::Pipeline;
use crate::repl;
use precis_domain::traits::LlmProvider;
use precis_intent::summarize_request_text;

/// Run a natural-language request, or enter the interactive loop when no
/// prompt was given.
pub async fn execute_ask<L>(
    args: AskArgs,
    pipeline: &Pipeline<L>,
    formatter: &Formatter,
) -> Result<()>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    match args.prompt {
        Some(prompt) => {
            let output = pipeline.run_prompt(&prompt).await?;
            println!("{}", output);
            Ok(())
        }
        None => repl::run(pipeline, formatter).await,
    }
}

/// Summarize a named file with a chosen tone.
///
/// The request is phrased as natural language and routed through the model,
/// the same path a bare prompt takes.
pub async fn execute_summarize<L>(args: SummarizeArgs, pipeline: &Pipeline<L>) -> Result<()>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let prompt = summarize_request_text(&args.file, args.tone.into());
    let output = pipeline.run_prompt(&prompt).await?;
    println!("{}", output);
    Ok(())
}

/// Print the effective configuration as TOML.
pub fn execute_config(config: &Config) -> Result<()> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}
