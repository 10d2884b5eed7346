//! Output formatting module

use anyhow::Result;
use rake_core::{RankedGroup, Ranking, RankingStats};
use serde::{Deserialize, Serialize};

/// Keywords extracted from one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentKeywords {
    /// File path, or `<text>` for inline input
    pub source: String,
    /// The one or two suggested keywords
    pub suggestions: Vec<String>,
    /// Ranked groups, possibly truncated
    pub groups: Vec<RankedGroup>,
    /// Document statistics
    pub stats: RankingStats,
}

impl DocumentKeywords {
    /// Assemble a document result, keeping at most `max_groups` groups
    pub fn new(
        source: impl Into<String>,
        suggestions: Vec<String>,
        ranking: Ranking,
        max_groups: Option<usize>,
    ) -> Self {
        let mut groups = ranking.groups;
        if let Some(limit) = max_groups {
            groups.truncate(limit);
        }

        Self {
            source: source.into(),
            suggestions,
            groups,
            stats: ranking.stats,
        }
    }

    /// A document that produced no keywords
    pub fn empty(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            suggestions: Vec::new(),
            groups: Vec::new(),
            stats: RankingStats::default(),
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one document's keywords
    fn format_document(&mut self, doc: &DocumentKeywords) -> Result<()>;

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
