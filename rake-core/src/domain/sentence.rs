//! Sentence splitting on punctuation-class delimiters

use regex::Regex;
use std::sync::OnceLock;

use super::chars::trim_blank;

/// Punctuation, tab, quotes, parentheses, or a hyphen standing between blanks
const SENTENCE_DELIMITERS: &str =
    r#"[.!?,;:\t"()']|[ \t\n\x0B\x0C\r]-[ \t\n\x0B\x0C\r]"#;

static DELIMITER_REGEX: OnceLock<Regex> = OnceLock::new();

fn delimiter_regex() -> &'static Regex {
    DELIMITER_REGEX
        .get_or_init(|| Regex::new(SENTENCE_DELIMITERS).expect("sentence delimiter pattern is valid"))
}

/// Splits text into sentence-like segments
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSplitter;

impl SentenceSplitter {
    /// Create a new splitter
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into trimmed segments
    ///
    /// Empty segments are kept; later stages ignore them.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        delimiter_regex().split(text).map(trim_blank).collect()
    }
}
