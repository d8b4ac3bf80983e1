//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use precis_extract::ExtractConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// CLI configuration, persisted as `~/.precis/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Model connection settings
    #[serde(default)]
    pub model: ModelSettings,

    /// Summary assembly settings
    #[serde(default)]
    pub summary: SummarySettings,

    /// Output settings
    #[serde(default)]
    pub settings: Settings,
}

/// Model connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Ollama endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// HTTP retry attempts
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Overall per-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Summary assembly settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySettings {
    /// Maximum preview slice length (characters)
    #[serde(default = "default_preview_length")]
    pub preview_length: usize,

    /// Maximum cleaned text length before counting (characters)
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Pretty-print the JSON response
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Enable colored diagnostics on stderr
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".precis").join("config.toml"))
    }

    /// Load configuration from file or create default.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// The extraction config derived from the summary settings.
    pub fn extract_config(&self) -> ExtractConfig {
        ExtractConfig {
            max_text_length: self.summary.max_text_length,
        }
    }
}

impl ModelSettings {
    /// Per-request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            max_retries: default_max_retries(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            preview_length: default_preview_length(),
            max_text_length: default_max_text_length(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pretty: true,
            color: true,
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "functiongemma".to_string()
}

fn default_max_retries() -> u32 {
    3
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_preview_length() -> usize {
    500
}

fn default_max_text_length() -> usize {
    5_000
}

fn default_true() -> bool {
    true
}
