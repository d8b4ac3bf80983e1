//! Interactive prompt loop.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::pipeline::Pipeline;
use precis_domain::traits::LlmProvider;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::debug;

const PROMPT: &str = "precis> ";

/// Run the interactive loop until the user exits.
pub async fn run<L>(pipeline: &Pipeline<L>, formatter: &Formatter) -> Result<()>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let mut editor =
        DefaultEditor::new().map_err(|e| CliError::Config(format!("Readline error: {}", e)))?;

    let history_path = history_path();
    if let Some(path) = &history_path {
        if editor.load_history(path).is_err() {
            debug!("No existing history at {}", path.display());
        }
    }

    eprintln!("{}", formatter.info("Ask for a document summary in plain language."));
    eprintln!("{}", formatter.info("Type 'help' for commands, 'exit' to quit."));

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                match line {
                    "exit" | "quit" | "q" => break,
                    "help" | "?" => {
                        print_help(formatter);
                        continue;
                    }
                    _ => {}
                }

                match pipeline.run_prompt(line).await {
                    Ok(output) => println!("{}", output),
                    Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}", formatter.error(&format!("Readline error: {}", e)));
                break;
            }
        }
    }

    if let Some(path) = &history_path {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = editor.save_history(path);
    }

    eprintln!("{}", formatter.info("Goodbye"));
    Ok(())
}

fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".precis").join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    eprintln!("{}", formatter.info("Commands:"));
    eprintln!("  help, ?       Show this help");
    eprintln!("  exit, quit, q Exit the loop");
    eprintln!();
    eprintln!("Anything else is treated as a request, e.g.:");
    eprintln!("  summarize ~/docs/report.pdf with a formal tone");
    eprintln!("  give me the gist of notes.md");
}
