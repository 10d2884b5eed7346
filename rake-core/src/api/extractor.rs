//! Keyword extractor entry points

use std::sync::Arc;

use crate::api::{Config, Input, Ranking};
use crate::application::RakePipeline;
use crate::domain::{RankedGroup, StopwordIndex, WordSeparator};
use crate::error::Result;

/// RAKE keyword extractor
///
/// Built once per stopword list; immutable afterwards, so one extractor can
/// serve many threads.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    pipeline: RakePipeline,
    config: Config,
}

impl KeywordExtractor {
    /// Create an extractor using the SMART English stopword list
    pub fn new() -> Self {
        Self::with_config(Config::default()).expect("SMART stopword list is never empty")
    }

    /// Create an extractor with custom configuration
    ///
    /// Fails with a configuration error when the stopword source yields no
    /// usable word, and with an I/O error when a stopword file is unreadable.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let index = StopwordIndex::new(config.stopwords.load()?)?;
        Ok(Self::from_index(Arc::new(index), config))
    }

    /// Create an extractor around an already built index
    pub fn with_index(index: Arc<StopwordIndex>) -> Self {
        Self::from_index(index, Config::default())
    }

    fn from_index(index: Arc<StopwordIndex>, config: Config) -> Self {
        let separator = WordSeparator::with_min_length(config.min_word_length);
        Self {
            pipeline: RakePipeline::with_separator(index, separator),
            config,
        }
    }

    /// Rank the keywords of `text`
    pub fn run(&self, text: &str) -> Ranking {
        Ranking::from_pipeline(self.pipeline.run(text), text.len())
    }

    /// Rank the keywords of any input source
    ///
    /// Fails with an invalid-input error for data that is not UTF-8 text.
    pub fn process(&self, input: Input) -> Result<Ranking> {
        let text = input.into_text()?;
        Ok(self.run(&text))
    }

    /// Pick one or two suggestions from ranked groups
    pub fn suggested_keywords(&self, groups: &[RankedGroup]) -> Vec<String> {
        self.pipeline.suggest(groups)
    }

    /// The stopword index in use
    pub fn index(&self) -> &StopwordIndex {
        self.pipeline.index()
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extractor that remembers its last ranking
///
/// For hosts that ask for suggestions without passing the ranking back. The
/// cache is overwritten by every successful run and never by a failed one.
#[derive(Debug, Clone)]
pub struct CachedExtractor {
    extractor: KeywordExtractor,
    last: Option<Ranking>,
}

impl CachedExtractor {
    pub fn new(extractor: KeywordExtractor) -> Self {
        Self {
            extractor,
            last: None,
        }
    }

    /// Rank `text` and remember the result
    pub fn run(&mut self, text: &str) -> &Ranking {
        self.last.insert(self.extractor.run(text))
    }

    /// Rank an input source and remember the result
    pub fn process(&mut self, input: Input) -> Result<&Ranking> {
        let ranking = self.extractor.process(input)?;
        Ok(self.last.insert(ranking))
    }

    /// The last successful ranking
    pub fn last_ranking(&self) -> Option<&Ranking> {
        self.last.as_ref()
    }

    /// Suggestions for `groups`, or for the last ranking when `None`
    ///
    /// Empty when no groups are given and nothing has been run yet.
    pub fn suggested_keywords(&self, groups: Option<&[RankedGroup]>) -> Vec<String> {
        match groups.or_else(|| self.last.as_ref().map(Ranking::groups)) {
            Some(groups) => self.extractor.suggested_keywords(groups),
            None => Vec::new(),
        }
    }

    /// The wrapped extractor
    pub fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }
}
