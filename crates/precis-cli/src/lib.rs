//! Precis CLI
//!
//! Command-line front end: parses arguments, loads configuration, wires an
//! LLM provider into the request pipeline, and prints the JSON response.

#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use pipeline::Pipeline;
