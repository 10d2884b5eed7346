//! Markdown output formatter

use super::{DocumentKeywords, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - one section per document with a ranking table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    separator: String,
    document_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, separator: impl Into<String>) -> Self {
        Self {
            writer,
            separator: separator.into(),
            document_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, doc: &DocumentKeywords) -> Result<()> {
        self.document_count += 1;

        writeln!(self.writer, "## {}", doc.source)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Suggested:** {}",
            doc.suggestions.join(&self.separator)
        )?;
        writeln!(self.writer)?;

        if !doc.groups.is_empty() {
            writeln!(self.writer, "| Rank | Weight | Phrases |")?;
            writeln!(self.writer, "|---:|---:|---|")?;
            for (rank, group) in doc.groups.iter().enumerate() {
                writeln!(
                    self.writer,
                    "| {} | {:.3} | {} |",
                    rank + 1,
                    group.weight,
                    group.phrases.join(", ")
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total documents: {}*", self.document_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
