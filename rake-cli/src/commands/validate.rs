//! Validate command implementation

use anyhow::{Context, Result};
use clap::Args;
use rake_core::{StopwordIndex, StopwordList};
use std::path::PathBuf;

use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the stopword file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub stopwords: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating stopword list: {}", self.stopwords.display());

        let list = StopwordList::from_file(&self.stopwords)
            .with_context(|| format!("Failed to read {}", self.stopwords.display()))?;

        match StopwordIndex::new(list) {
            Ok(index) => {
                let list = index.list();
                let mut distinct: Vec<&str> = list.iter().collect();
                distinct.sort_unstable();
                distinct.dedup();

                println!("✓ Stopword list is valid!");
                println!("  Words: {}", list.len());
                println!("  Distinct words: {}", distinct.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Stopword list is invalid!");
                println!("  Error: {e}");
                Err(CliError::ConfigError(e.to_string()).into())
            }
        }
    }
}
