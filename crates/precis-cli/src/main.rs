//! Precis binary entry point.

use clap::Parser;
use precis_cli::cli::{AskArgs, Cli, Command};
use precis_cli::{commands, Config, Formatter, Pipeline, Result};
use precis_llm::OllamaProvider;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr so stdout stays a valid JSON stream
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|_| {
        let config = Config::default();
        let _ = config.save();
        config
    });

    let pretty = config.settings.pretty && !cli.compact;
    let color = config.settings.color && !cli.no_color;
    let formatter = Formatter::new(pretty, color);

    let provider = OllamaProvider::new(&config.model.endpoint, &config.model.model)
        .with_max_retries(config.model.max_retries);
    let pipeline = Pipeline::new(provider, &config, formatter.clone());

    match cli.command {
        Some(Command::Ask(args)) => commands::execute_ask(args, &pipeline, &formatter).await,
        Some(Command::Summarize(args)) => commands::execute_summarize(args, &pipeline).await,
        Some(Command::Config) => commands::execute_config(&config),
        None => {
            let args = AskArgs { prompt: cli.prompt };
            commands::execute_ask(args, &pipeline, &formatter).await
        }
    }
}
