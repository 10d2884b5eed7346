//! Plain text output formatter

use super::{DocumentKeywords, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter
///
/// Prints the joined suggestions, then one line per ranked group.
pub struct TextFormatter<W: Write> {
    writer: W,
    separator: String,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, separator: impl Into<String>) -> Self {
        Self {
            writer,
            separator: separator.into(),
            documents: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, doc: &DocumentKeywords) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        self.documents += 1;

        writeln!(self.writer, "== {} ==", doc.source)?;
        writeln!(
            self.writer,
            "Suggested: {}",
            doc.suggestions.join(&self.separator)
        )?;
        for group in &doc.groups {
            writeln!(self.writer, "{:>8.3}  {}", group.weight, group.phrases.join(", "))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
