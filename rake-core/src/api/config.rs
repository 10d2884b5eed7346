//! Configuration API for keyword extraction

use std::path::PathBuf;

use crate::domain::StopwordList;
use crate::error::{Error, Result};

/// Default configuration constants
pub mod defaults {
    /// Words must be longer than this many bytes to be scored
    pub const MIN_WORD_LENGTH: usize = 0;
}

/// Where the stopword list comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StopwordSource {
    /// The embedded SMART English list
    #[default]
    Smart,
    /// A stopword file on disk
    File(PathBuf),
    /// A raw stopword blob
    Text(String),
    /// Pre-parsed words
    Words(Vec<String>),
}

impl StopwordSource {
    /// Load the list this source describes
    pub fn load(&self) -> Result<StopwordList> {
        match self {
            StopwordSource::Smart => Ok(StopwordList::smart()),
            StopwordSource::File(path) => StopwordList::from_file(path),
            StopwordSource::Text(text) => Ok(StopwordList::parse(text)),
            StopwordSource::Words(words) => Ok(StopwordList::from_words(words)),
        }
    }
}

/// Extraction configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(crate) stopwords: StopwordSource,
    pub(crate) min_word_length: usize,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The configured stopword source
    pub fn stopwords(&self) -> &StopwordSource {
        &self.stopwords
    }

    /// The configured minimum word length
    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        match &self.stopwords {
            StopwordSource::Words(words) if words.iter().all(|w| w.trim().is_empty()) => Err(
                Error::Configuration("stopword list must contain at least one word".into()),
            ),
            StopwordSource::File(path) if path.as_os_str().is_empty() => Err(
                Error::Configuration("stopword file path must not be empty".into()),
            ),
            _ => Ok(()),
        }
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    stopwords: Option<StopwordSource>,
    min_word_length: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stopword source
    pub fn stopwords(mut self, source: StopwordSource) -> Self {
        self.stopwords = Some(source);
        self
    }

    /// Read stopwords from a file
    pub fn stopword_file(self, path: impl Into<PathBuf>) -> Self {
        self.stopwords(StopwordSource::File(path.into()))
    }

    /// Use a raw stopword blob
    pub fn stopword_text(self, text: impl Into<String>) -> Self {
        self.stopwords(StopwordSource::Text(text.into()))
    }

    /// Use pre-parsed stopwords
    pub fn stopword_words<I, S>(self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords(StopwordSource::Words(
            words.into_iter().map(Into::into).collect(),
        ))
    }

    /// Set the minimum scored word length
    pub fn min_word_length(mut self, length: usize) -> Self {
        self.min_word_length = Some(length);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let config = Config {
            stopwords: self.stopwords.unwrap_or_default(),
            min_word_length: self.min_word_length.unwrap_or(defaults::MIN_WORD_LENGTH),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::builder().build().unwrap();
        assert_eq!(config.stopwords(), &StopwordSource::Smart);
        assert_eq!(config.min_word_length(), 0);
    }

    #[test]
    fn test_builder_settings() {
        let config = Config::builder()
            .stopword_words(["the", "of"])
            .min_word_length(2)
            .build()
            .unwrap();
        assert_eq!(
            config.stopwords(),
            &StopwordSource::Words(vec!["the".into(), "of".into()])
        );
        assert_eq!(config.min_word_length(), 2);
    }

    #[test]
    fn test_empty_word_list_rejected() {
        let err = Config::builder()
            .stopword_words(Vec::<String>::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        let err = Config::builder()
            .stopword_words([" ", ""])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_empty_file_path_rejected() {
        let err = Config::builder().stopword_file("").build().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_source_load() {
        let list = StopwordSource::Text("# c\nthe of\n".into()).load().unwrap();
        assert_eq!(list.len(), 2);

        assert!(StopwordSource::Smart.load().unwrap().contains("over"));

        let err = StopwordSource::File("/nonexistent/stopwords.txt".into())
            .load()
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
