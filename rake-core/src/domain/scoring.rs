//! Word and phrase scoring
//!
//! Word score is `deg(w) / freq(w)`, where `deg(w)` sums, over every
//! occurrence of `w`, the number of other words in its phrase, plus
//! `freq(w)`. A phrase scores the sum of its word scores.

use std::collections::HashMap;

use super::words::WordSeparator;

/// Co-occurrence statistics of one word
#[derive(Debug, Clone, PartialEq)]
pub struct WordStats {
    /// Lowercased word
    pub word: String,
    /// Occurrences across all candidate phrases
    pub frequency: usize,
    /// Co-occurrence degree, already including `frequency`
    pub degree: usize,
    /// `degree / frequency`
    pub score: f64,
}

/// Word statistics of one document, in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordScores {
    stats: Vec<WordStats>,
    index: HashMap<String, usize>,
}

impl WordScores {
    /// Statistics for `word`
    pub fn get(&self, word: &str) -> Option<&WordStats> {
        self.index.get(word).map(|&i| &self.stats[i])
    }

    /// Score of `word`
    pub fn score(&self, word: &str) -> Option<f64> {
        self.get(word).map(|stats| stats.score)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// All words in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = &WordStats> {
        self.stats.iter()
    }
}

/// Computes per-word statistics over a document's candidate phrases
#[derive(Debug, Clone, Copy, Default)]
pub struct WordScorer {
    separator: WordSeparator,
}

impl WordScorer {
    pub fn new(separator: WordSeparator) -> Self {
        Self { separator }
    }

    /// Score every word of `phrases`
    ///
    /// Repeated words inside one phrase count once per occurrence.
    pub fn score(&self, phrases: &[String]) -> WordScores {
        let mut scores = WordScores::default();

        for phrase in phrases {
            let words = self.separator.separate(phrase);
            let phrase_degree = words.len().saturating_sub(1);

            for word in words {
                let slot = match scores.index.get(&word) {
                    Some(&slot) => slot,
                    None => {
                        let slot = scores.stats.len();
                        scores.index.insert(word.clone(), slot);
                        scores.stats.push(WordStats {
                            word,
                            frequency: 0,
                            degree: 0,
                            score: 0.0,
                        });
                        slot
                    }
                };
                let stats = &mut scores.stats[slot];
                stats.frequency += 1;
                stats.degree += phrase_degree;
            }
        }

        for stats in &mut scores.stats {
            stats.degree += stats.frequency;
            stats.score = stats.degree as f64 / stats.frequency as f64;
        }

        log::trace!("Scored {} distinct words", scores.len());
        scores
    }
}

/// Phrase scores keyed by phrase text, in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhraseScores {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl PhraseScores {
    /// Set the score of `phrase`, keeping its original position if present
    pub fn insert(&mut self, phrase: &str, score: f64) {
        match self.index.get(phrase) {
            Some(&slot) => self.entries[slot].1 = score,
            None => {
                self.index.insert(phrase.to_string(), self.entries.len());
                self.entries.push((phrase.to_string(), score));
            }
        }
    }

    pub fn get(&self, phrase: &str) -> Option<f64> {
        self.index.get(phrase).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct phrases
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(phrase, score)` pairs in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(phrase, score)| (phrase.as_str(), *score))
    }
}

/// Sums word scores into phrase scores
#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseScorer {
    separator: WordSeparator,
}

impl PhraseScorer {
    /// `separator` must match the one used to compute the word scores
    pub fn new(separator: WordSeparator) -> Self {
        Self { separator }
    }

    /// Score every phrase; a phrase without scorable words scores 0
    pub fn score(&self, phrases: &[String], word_scores: &WordScores) -> PhraseScores {
        let mut scores = PhraseScores::default();

        for phrase in phrases {
            let score = self
                .separator
                .separate(phrase)
                .iter()
                .filter_map(|word| word_scores.score(word))
                .fold(0.0, |total, score| total + score);
            scores.insert(phrase, score);
        }

        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(items: &[&str]) -> Vec<String> {
        items.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_repeated_single_word_phrase() {
        let scores = WordScorer::default().score(&phrases(&["set"; 5]));
        let set = scores.get("set").unwrap();
        assert_eq!(set.frequency, 5);
        assert_eq!(set.degree, 5);
        assert_eq!(set.score, 1.0);
    }

    #[test]
    fn test_degree_and_frequency() {
        let scores = WordScorer::default().score(&phrases(&[
            "linear constraints",
            "linear diophantine equations",
            "set",
        ]));

        let linear = scores.get("linear").unwrap();
        assert_eq!(linear.frequency, 2);
        assert_eq!(linear.degree, 1 + 2 + 2);
        assert_eq!(linear.score, 2.5);

        assert_eq!(scores.score("constraints"), Some(2.0));
        assert_eq!(scores.score("equations"), Some(3.0));
        assert_eq!(scores.score("set"), Some(1.0));
        assert_eq!(scores.len(), 5);
    }

    #[test]
    fn test_repeated_word_within_phrase() {
        let scores = WordScorer::default().score(&phrases(&["bye bye"]));
        let bye = scores.get("bye").unwrap();
        assert_eq!(bye.frequency, 2);
        assert_eq!(bye.degree, 4);
        assert_eq!(bye.score, 2.0);
    }

    #[test]
    fn test_numbers_not_scored() {
        let scores = WordScorer::default().score(&phrases(&["windows 95", "1999"]));
        assert_eq!(scores.len(), 1);
        assert_eq!(scores.score("windows"), Some(1.0));
        assert!(scores.get("95").is_none());
    }

    #[test]
    fn test_word_order_is_first_occurrence() {
        let scores = WordScorer::default().score(&phrases(&["beta alpha", "alpha gamma"]));
        let words: Vec<_> = scores.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["beta", "alpha", "gamma"]);
    }

    #[test]
    fn test_phrase_scores_sum_word_scores() {
        let list = phrases(&["linear constraints", "set", "natural numbers", "set"]);
        let word_scores = WordScorer::default().score(&list);
        let scores = PhraseScorer::default().score(&list, &word_scores);

        assert_eq!(scores.len(), 3);
        assert_eq!(scores.get("linear constraints"), Some(4.0));
        assert_eq!(scores.get("natural numbers"), Some(4.0));
        assert_eq!(scores.get("set"), Some(1.0));

        let order: Vec<_> = scores.iter().map(|(phrase, _)| phrase).collect();
        assert_eq!(order, vec!["linear constraints", "set", "natural numbers"]);
    }

    #[test]
    fn test_phrase_without_words_scores_zero() {
        let list = phrases(&["2024", "release"]);
        let word_scores = WordScorer::default().score(&list);
        let scores = PhraseScorer::default().score(&list, &word_scores);
        assert_eq!(scores.get("2024"), Some(0.0));
        assert!(!scores.get("2024").unwrap().is_sign_negative());
        assert_eq!(scores.get("release"), Some(1.0));
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut scores = PhraseScores::default();
        scores.insert("a", 1.0);
        scores.insert("b", 2.0);
        scores.insert("a", 3.0);
        let entries: Vec<_> = scores.iter().collect();
        assert_eq!(entries, vec![("a", 3.0), ("b", 2.0)]);
    }
}
