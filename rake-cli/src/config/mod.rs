//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Separator used to join suggestions, the OR form of a `LIKE` clause
pub const DEFAULT_SEPARATOR: &str = " | ";

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

/// Extraction-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Stopword file; the embedded SMART list when absent
    pub stopwords: Option<PathBuf>,

    /// Words must be longer than this to be scored
    pub min_word_length: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            stopwords: None,
            min_word_length: rake_core::api::defaults::MIN_WORD_LENGTH,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Separator between suggestions
    pub separator: String,

    /// Number of ranked groups to print (all when absent)
    pub max_groups: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            separator: DEFAULT_SEPARATOR.to_string(),
            max_groups: None,
        }
    }
}
