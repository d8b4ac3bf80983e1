//! Configuration for the extraction layer

use crate::error::ExtractError;
use serde::{Deserialize, Serialize};

/// Configuration for document extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Maximum cleaned text length in characters; extraction output is
    /// truncated to this before counting
    pub max_text_length: usize,
}

impl ExtractConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractError> {
        if self.max_text_length == 0 {
            return Err(ExtractError::Config(
                "max_text_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_text_length: 5_000,
        }
    }
}
