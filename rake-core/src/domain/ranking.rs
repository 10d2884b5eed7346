//! Grouping of phrases by score

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::scoring::PhraseScores;

/// Phrases sharing one score
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RankedGroup {
    /// Phrase texts in first-occurrence order
    pub phrases: Vec<String>,
    /// The shared score
    pub weight: f64,
}

impl RankedGroup {
    pub fn new(phrases: Vec<String>, weight: f64) -> Self {
        Self { phrases, weight }
    }

    /// Number of phrases in the group
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Phrase at `index` within the group
    pub fn get(&self, index: usize) -> Option<&str> {
        self.phrases.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }
}

/// Orders phrase scores into groups of strictly decreasing weight
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker;

impl Ranker {
    pub fn new() -> Self {
        Self
    }

    /// One group per distinct score, highest first
    ///
    /// Scores are compared for exact equality. Within a group, phrases keep
    /// the order in which they first appeared in the document.
    pub fn rank(&self, scores: &PhraseScores) -> Vec<RankedGroup> {
        let mut groups: Vec<RankedGroup> = Vec::new();
        let mut by_weight: HashMap<u64, usize> = HashMap::new();

        for (phrase, score) in scores.iter() {
            // +0.0 folds a negative zero into the positive one
            let weight = score + 0.0;
            let slot = *by_weight.entry(weight.to_bits()).or_insert_with(|| {
                groups.push(RankedGroup::new(Vec::new(), weight));
                groups.len() - 1
            });
            groups[slot].phrases.push(phrase.to_string());
        }

        groups.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(entries: &[(&str, f64)]) -> PhraseScores {
        let mut scores = PhraseScores::default();
        for (phrase, score) in entries {
            scores.insert(phrase, *score);
        }
        scores
    }

    #[test]
    fn test_groups_by_identical_score() {
        let groups = Ranker::new().rank(&scores(&[
            ("compatibility", 1.0),
            ("systems", 1.0),
            ("linear constraints", 4.0),
            ("set", 1.0),
            ("natural numbers", 4.0),
        ]));

        assert_eq!(
            groups,
            vec![
                RankedGroup::new(
                    vec!["linear constraints".into(), "natural numbers".into()],
                    4.0
                ),
                RankedGroup::new(
                    vec!["compatibility".into(), "systems".into(), "set".into()],
                    1.0
                ),
            ]
        );
    }

    #[test]
    fn test_weights_strictly_decreasing() {
        let groups = Ranker::new().rank(&scores(&[
            ("a", 2.5),
            ("b", 8.5),
            ("c", 0.0),
            ("d", 2.5),
            ("e", 8.0),
        ]));
        let weights: Vec<f64> = groups.iter().map(|g| g.weight).collect();
        assert_eq!(weights, vec![8.5, 8.0, 2.5, 0.0]);
        assert!(groups.windows(2).all(|w| w[0].weight > w[1].weight));
    }

    #[test]
    fn test_grouping_independent_of_insertion_order() {
        let forward = Ranker::new().rank(&scores(&[("x", 3.0), ("y", 1.0), ("z", 3.0)]));
        let backward = Ranker::new().rank(&scores(&[("z", 3.0), ("y", 1.0), ("x", 3.0)]));

        let members = |groups: &[RankedGroup]| -> Vec<Vec<String>> {
            groups
                .iter()
                .map(|g| {
                    let mut phrases = g.phrases.clone();
                    phrases.sort();
                    phrases
                })
                .collect()
        };
        assert_eq!(members(&forward), members(&backward));
    }

    #[test]
    fn test_empty_scores() {
        assert!(Ranker::new().rank(&PhraseScores::default()).is_empty());
    }

    #[test]
    fn test_group_accessors() {
        let group = RankedGroup::new(vec!["a".into(), "b".into()], 2.0);
        assert_eq!(group.len(), 2);
        assert!(!group.is_empty());
        assert_eq!(group.get(1), Some("b"));
        assert_eq!(group.get(2), None);
        assert_eq!(group.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_negative_zero_weight_is_positive() {
        let groups = Ranker::new().rank(&scores(&[
            ("2024", -0.0),
            ("v2", 0.0),
            ("release", 1.0),
        ]));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].phrases, vec!["2024", "v2"]);
        assert!(!groups[1].weight.is_sign_negative());
    }
}
