//! Candidate phrase extraction

use super::chars::trim_blank;
use super::stopwords::StopwordIndex;

/// Cuts sentences into candidate phrases at stopword occurrences
#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseExtractor;

impl PhraseExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }

    /// Candidate phrases of all sentences, in sentence then fragment order
    ///
    /// Phrases are lowercased and trimmed; empty fragments are dropped and
    /// repeated phrases are kept.
    pub fn extract(&self, sentences: &[&str], index: &StopwordIndex) -> Vec<String> {
        sentences
            .iter()
            .flat_map(|sentence| index.match_and_split(sentence))
            .map(|fragment| trim_blank(fragment).to_ascii_lowercase())
            .filter(|phrase| !phrase.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_candidate_phrases() {
        let index = StopwordIndex::from_text("of over the").unwrap();
        let sentences = ["Compatibility of systems of linear constraints over the set of natural numbers", ""];
        let phrases = PhraseExtractor::new().extract(&sentences, &index);
        assert_eq!(
            phrases,
            vec![
                "compatibility",
                "systems",
                "linear constraints",
                "set",
                "natural numbers"
            ]
        );
    }

    #[test]
    fn test_repeated_phrases_kept() {
        let index = StopwordIndex::from_text("and").unwrap();
        let phrases = PhraseExtractor::new().extract(&["Rust and rust", "RUST"], &index);
        assert_eq!(phrases, vec!["rust", "rust", "rust"]);
    }

    #[test]
    fn test_only_stopwords_yields_nothing() {
        let index = StopwordIndex::from_text("the of and").unwrap();
        let phrases = PhraseExtractor::new().extract(&["the of", "", "and  the"], &index);
        assert!(phrases.is_empty());
    }
}
