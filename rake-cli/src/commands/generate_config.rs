//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to point at your stopword list");
        println!("2. Validate the stopword list:");
        println!("   rake validate --stopwords stopwords.txt");
        println!("3. Use it for extraction:");
        println!(
            "   rake extract -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    pub fn template() -> &'static str {
        r#"# RAKE keyword extraction configuration

[extraction]
# Stopword file: one or more space-separated words per line,
# lines starting with '#' are comments.
# Leave unset to use the embedded SMART English list.
# stopwords = "stopwords.txt"

# Words must be longer than this many characters to be scored
min_word_length = 0

[output]
# One of: text, json, markdown
default_format = "text"

# Pretty print JSON output
pretty_json = true

# Separator between suggestions (" | " reads as OR in LIKE clauses)
separator = " | "

# Number of ranked groups to print per document (all when unset)
# max_groups = 10
"#
    }
}
