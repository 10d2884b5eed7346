//! Property tests for the extraction stages

use proptest::prelude::*;
use rake_core::domain::{
    PhraseExtractor, PhraseScorer, Ranker, SentenceSplitter, StopwordIndex, SuggestionSelector,
    WordScorer,
};
use rake_core::{KeywordExtractor, RankedGroup};
use std::collections::HashSet;

const STOPWORDS: &str = "the of and over a in";

fn index() -> StopwordIndex {
    StopwordIndex::from_text(STOPWORDS).unwrap()
}

/// Lowercase words that are never stopwords
fn content_word() -> impl Strategy<Value = String> {
    "[b-z]{2,8}".prop_filter("not a stopword", |w| {
        !STOPWORDS.split(' ').any(|s| s == w)
    })
}

fn sentence_of(words: impl Strategy<Value = String>) -> impl Strategy<Value = String> {
    prop::collection::vec(words, 1..6).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn sentences_without_stopwords_become_phrases(
        sentences in prop::collection::vec(sentence_of(content_word()), 1..5)
    ) {
        let text = sentences.join(". ");
        let split = SentenceSplitter::new().split(&text);
        let phrases = PhraseExtractor::new().extract(&split, &index());
        prop_assert_eq!(phrases, sentences);
    }

    #[test]
    fn stopwords_and_delimiters_only_rank_empty(
        parts in prop::collection::vec(
            prop::sample::select(vec!["the", "of", "and", "over", "a", "in", ",", ".", "!", "(", ")", " - "]),
            0..20,
        )
    ) {
        let text = parts.join(" ");
        let extractor = KeywordExtractor::with_index(std::sync::Arc::new(index()));
        let ranking = extractor.run(&text);
        prop_assert!(ranking.is_empty());
        prop_assert_eq!(ranking.stats.candidate_count, 0);
    }

    #[test]
    fn repeated_single_word_scores_one(word in content_word(), n in 1usize..20) {
        let phrases = vec![word.clone(); n];
        let scores = WordScorer::default().score(&phrases);
        let stats = scores.get(&word).unwrap();
        prop_assert_eq!(stats.frequency, n);
        prop_assert_eq!(stats.degree, n);
        prop_assert_eq!(stats.score, 1.0);
    }

    #[test]
    fn ranking_partitions_phrases(
        sentences in prop::collection::vec(sentence_of(content_word()), 1..8)
    ) {
        let phrases: Vec<String> = sentences;
        let word_scores = WordScorer::default().score(&phrases);
        let phrase_scores = PhraseScorer::default().score(&phrases, &word_scores);
        let groups = Ranker::new().rank(&phrase_scores);

        prop_assert!(groups.windows(2).all(|w| w[0].weight > w[1].weight));

        let mut seen = HashSet::new();
        for group in &groups {
            prop_assert!(!group.is_empty());
            for phrase in group.iter() {
                prop_assert!(seen.insert(phrase.to_string()), "{} in two groups", phrase);
                prop_assert_eq!(phrase_scores.get(phrase), Some(group.weight));
            }
        }
        prop_assert_eq!(seen.len(), phrase_scores.len());
    }

    #[test]
    fn selection_is_bounded_prefix_of_ranking(
        weights in prop::collection::vec((1usize..5, 0.5f64..30.0), 0..6)
    ) {
        let mut weights = weights;
        weights.sort_by(|a, b| b.1.total_cmp(&a.1));
        weights.dedup_by(|a, b| a.1 == b.1);

        let groups: Vec<RankedGroup> = weights
            .iter()
            .enumerate()
            .map(|(g, (size, weight))| {
                RankedGroup::new((0..*size).map(|i| format!("g{g}p{i}")).collect(), *weight)
            })
            .collect();

        let picked = SuggestionSelector::new().select(&groups);
        prop_assert!(picked.len() <= 2);
        if let Some(first) = groups.first() {
            prop_assert_eq!(picked.first(), first.phrases.first());
        }

        let all: HashSet<&str> = groups.iter().flat_map(|g| g.iter()).collect();
        prop_assert!(picked.iter().all(|p| all.contains(p.as_str())));
    }

    #[test]
    fn run_is_deterministic(text in "[a-z ,.!?]{0,200}") {
        let extractor = KeywordExtractor::with_index(std::sync::Arc::new(index()));
        prop_assert_eq!(extractor.run(&text), extractor.run(&text));
    }
}
