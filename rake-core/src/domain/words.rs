//! Word tokenization of candidate phrases

use smallvec::SmallVec;

use super::chars::{is_numeric, is_token_char};

/// Words of one phrase; most candidate phrases hold a handful
pub type WordList = SmallVec<[String; 4]>;

/// Splits a phrase into scorable words
///
/// Tokens are cut on any character other than ASCII letters, digits, `_`,
/// `+`, `-` and `/`. A token is kept when it is longer than
/// `min_word_length` bytes and is not a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordSeparator {
    min_word_length: usize,
}

impl WordSeparator {
    /// Separator keeping every non-empty, non-numeric token
    pub fn new() -> Self {
        Self::default()
    }

    /// Separator with a minimum word length
    pub fn with_min_length(min_word_length: usize) -> Self {
        Self { min_word_length }
    }

    /// The configured minimum length
    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    /// Tokenize `phrase`, lowercasing each kept word
    pub fn separate(&self, phrase: &str) -> WordList {
        phrase
            .split(|ch: char| !is_token_char(ch))
            .filter(|token| token.len() > self.min_word_length && !is_numeric(token))
            .map(str::to_ascii_lowercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(phrase: &str) -> Vec<String> {
        WordSeparator::new().separate(phrase).into_vec()
    }

    #[test]
    fn test_separate_words() {
        assert_eq!(words("linear constraints"), vec!["linear", "constraints"]);
        assert_eq!(words("Linear  Constraints"), vec!["linear", "constraints"]);
    }

    #[test]
    fn test_keeps_joiner_characters() {
        assert_eq!(
            words("c++ and/or well-known snake_case"),
            vec!["c++", "and/or", "well-known", "snake_case"]
        );
    }

    #[test]
    fn test_drops_numbers() {
        assert_eq!(words("windows 95 release 2"), vec!["windows", "release"]);
        assert_eq!(words("-3 x86"), vec!["x86"]);
        assert!(words("1999 2000").is_empty());
    }

    #[test]
    fn test_non_ascii_separates() {
        assert_eq!(words("café"), vec!["caf"]);
    }

    #[test]
    fn test_min_length() {
        let separator = WordSeparator::with_min_length(2);
        assert_eq!(separator.min_word_length(), 2);
        assert_eq!(
            separator.separate("a big ox jumps").into_vec(),
            vec!["big", "jumps"]
        );
    }
}
