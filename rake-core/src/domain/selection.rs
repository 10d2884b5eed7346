//! Selection of the final keyword suggestions

use super::ranking::RankedGroup;

/// Accumulated weight past which selection stops
pub const WEIGHT_THRESHOLD: f64 = 20.0;

/// Upper bound on the number of suggestions
pub const MAX_SUGGESTIONS: usize = 2;

/// Greedy walk over ranked groups picking one or two suggestions
///
/// For each group, in rank order:
/// - a group of more than two phrases contributes its first phrase and its
///   weight; while the total is still below the threshold, it also
///   contributes its second phrase and the total doubles;
/// - a smaller group contributes its first phrase and its weight, but only
///   while the total is below the threshold.
///
/// The walk stops once the total exceeds the threshold or more than one
/// phrase has been picked. It may pick nothing at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestionSelector;

impl SuggestionSelector {
    pub fn new() -> Self {
        Self
    }

    /// Pick at most [`MAX_SUGGESTIONS`] phrases from `groups`
    pub fn select(&self, groups: &[RankedGroup]) -> Vec<String> {
        let mut picked: Vec<String> = Vec::with_capacity(3);
        let mut total_weight = 0.0;

        for group in groups {
            if group.len() > 2 {
                picked.push(group.phrases[0].clone());
                total_weight += group.weight;
                if total_weight < WEIGHT_THRESHOLD {
                    picked.push(group.phrases[1].clone());
                    total_weight *= 2.0;
                }
            } else if total_weight < WEIGHT_THRESHOLD {
                if let Some(first) = group.phrases.first() {
                    picked.push(first.clone());
                    total_weight += group.weight;
                }
            }

            if total_weight > WEIGHT_THRESHOLD || picked.len() > 1 {
                break;
            }
        }

        picked.truncate(MAX_SUGGESTIONS);
        picked
    }
}
