//! RAKE pipeline orchestration

use std::sync::Arc;

use crate::domain::{
    PhraseExtractor, PhraseScorer, RankedGroup, Ranker, SentenceSplitter, StopwordIndex,
    SuggestionSelector, WordScorer, WordSeparator,
};

/// Counts gathered while running the pipeline on one document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineMetrics {
    /// Sentence segments, empty ones included
    pub sentence_count: usize,
    /// Candidate phrases, repeats included
    pub candidate_count: usize,
    /// Distinct candidate phrases
    pub distinct_phrase_count: usize,
    /// Distinct scored words
    pub word_count: usize,
}

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub groups: Vec<RankedGroup>,
    pub metrics: PipelineMetrics,
}

/// Runs all extraction stages over a single document
///
/// The pipeline holds only immutable state and can be shared between
/// threads; every call to [`RakePipeline::run`] is independent.
#[derive(Debug, Clone)]
pub struct RakePipeline {
    index: Arc<StopwordIndex>,
    splitter: SentenceSplitter,
    extractor: PhraseExtractor,
    word_scorer: WordScorer,
    phrase_scorer: PhraseScorer,
    ranker: Ranker,
    selector: SuggestionSelector,
}

impl RakePipeline {
    /// Create a pipeline scoring every non-empty, non-numeric word
    pub fn new(index: Arc<StopwordIndex>) -> Self {
        Self::with_separator(index, WordSeparator::new())
    }

    /// Create a pipeline with a custom word separator
    pub fn with_separator(index: Arc<StopwordIndex>, separator: WordSeparator) -> Self {
        Self {
            index,
            splitter: SentenceSplitter::new(),
            extractor: PhraseExtractor::new(),
            word_scorer: WordScorer::new(separator),
            phrase_scorer: PhraseScorer::new(separator),
            ranker: Ranker::new(),
            selector: SuggestionSelector::new(),
        }
    }

    /// The stopword index in use
    pub fn index(&self) -> &StopwordIndex {
        &self.index
    }

    /// Rank the candidate phrases of `text`
    pub fn run(&self, text: &str) -> PipelineOutput {
        let sentences = self.splitter.split(text);
        let phrases = self.extractor.extract(&sentences, &self.index);
        let word_scores = self.word_scorer.score(&phrases);
        let phrase_scores = self.phrase_scorer.score(&phrases, &word_scores);
        let groups = self.ranker.rank(&phrase_scores);

        let metrics = PipelineMetrics {
            sentence_count: sentences.len(),
            candidate_count: phrases.len(),
            distinct_phrase_count: phrase_scores.len(),
            word_count: word_scores.len(),
        };

        log::debug!(
            "RAKE run: {} bytes, {} sentences, {} candidates, {} distinct phrases, {} words, {} groups",
            text.len(),
            metrics.sentence_count,
            metrics.candidate_count,
            metrics.distinct_phrase_count,
            metrics.word_count,
            groups.len()
        );

        PipelineOutput { groups, metrics }
    }

    /// Pick the final suggestions from ranked groups
    pub fn suggest(&self, groups: &[RankedGroup]) -> Vec<String> {
        self.selector.select(groups)
    }
}
