//! Output types for keyword extraction

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::application::{PipelineMetrics, PipelineOutput};
use crate::domain::RankedGroup;

/// Ranked keyword groups of one document
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ranking {
    /// Groups in strictly decreasing weight order
    pub groups: Vec<RankedGroup>,
    /// Document statistics
    pub stats: RankingStats,
}

/// Statistics gathered while ranking a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RankingStats {
    /// Bytes of input text
    pub bytes_processed: usize,
    /// Sentence segments, empty ones included
    pub sentence_count: usize,
    /// Candidate phrases, repeats included
    pub candidate_count: usize,
    /// Distinct candidate phrases
    pub distinct_phrase_count: usize,
    /// Distinct scored words
    pub word_count: usize,
}

impl Ranking {
    pub(crate) fn from_pipeline(output: PipelineOutput, bytes_processed: usize) -> Self {
        let PipelineMetrics {
            sentence_count,
            candidate_count,
            distinct_phrase_count,
            word_count,
        } = output.metrics;

        Self {
            groups: output.groups,
            stats: RankingStats {
                bytes_processed,
                sentence_count,
                candidate_count,
                distinct_phrase_count,
                word_count,
            },
        }
    }

    /// Whether no phrase was found
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The ranked groups
    pub fn groups(&self) -> &[RankedGroup] {
        &self.groups
    }

    /// The first `n` groups
    pub fn top_groups(&self, n: usize) -> &[RankedGroup] {
        &self.groups[..n.min(self.groups.len())]
    }

    /// Every phrase with its score, in rank order
    pub fn keywords(&self) -> Vec<(&str, f64)> {
        self.groups
            .iter()
            .flat_map(|group| group.iter().map(move |phrase| (phrase, group.weight)))
            .collect()
    }
}
