//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// precis - Turn a natural-language request into a document preview.
#[derive(Debug, Parser)]
#[command(name = "precis")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Natural-language request (e.g. "summarize report.pdf formally").
    /// Omitted, precis enters an interactive prompt loop.
    pub prompt: Option<String>,

    /// Emit compact (single-line) JSON
    #[arg(long, global = true)]
    pub compact: bool,

    /// Disable colored diagnostics on stderr
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ask in natural language (same as the bare positional prompt)
    Ask(AskArgs),

    /// Summarize a specific file with a specific tone
    Summarize(SummarizeArgs),

    /// Print the effective configuration
    Config,
}

/// Arguments for the ask command.
#[derive(Debug, Parser)]
pub struct AskArgs {
    /// Natural-language request; omitted, enters the interactive loop
    pub prompt: Option<String>,
}

/// Arguments for the summarize command.
#[derive(Debug, Parser)]
pub struct SummarizeArgs {
    /// Document to summarize (.txt, .md, .pdf, .docx, .doc, .pptx)
    #[arg(short, long)]
    pub file: String,

    /// Summary tone
    #[arg(short, long, value_enum, default_value = "normal")]
    pub tone: ToneArg,
}

/// Tone argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ToneArg {
    /// Neutral phrasing (default)
    Normal,
    /// Conversational phrasing
    Casual,
    /// Business phrasing
    Formal,
    /// Minimal phrasing
    Concise,
}

impl From<ToneArg> for precis_domain::Tone {
    fn from(tone: ToneArg) -> Self {
        match tone {
            ToneArg::Normal => precis_domain::Tone::Normal,
            ToneArg::Casual => precis_domain::Tone::Casual,
            ToneArg::Formal => precis_domain::Tone::Formal,
            ToneArg::Concise => precis_domain::Tone::Concise,
        }
    }
}
