//! Multi-field fuzzy scoring of candidate pools.

use super::bitap::{BitapOptions, Pattern};
use super::fields::Scorable;

/// Cost used in place of an exact (zero-cost) match so that field weights
/// still order exact matches.
pub(crate) const MIN_COST: f64 = 0.001;

/// A candidate that matched, with its combined score (lower is better).
#[derive(Debug, Clone, Copy)]
pub struct Scored<T> {
    pub item: T,
    pub score: f64,
}

/// Scores candidates of any category against one query.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    pattern: Pattern,
    options: BitapOptions,
}

impl FuzzyMatcher {
    pub(crate) fn new(query: &str, options: BitapOptions) -> Self {
        Self {
            pattern: Pattern::new(query),
            options,
        }
    }

    /// Best weighted cost over all field values that match within the
    /// threshold, or `None` if no value matches.
    ///
    /// Each matching value contributes `max(cost, MIN_COST) * weight`; the
    /// smallest contribution becomes the candidate's score.
    pub fn score<'c>(&self, candidate: &impl Scorable<'c>) -> Option<f64> {
        if self.pattern.is_empty() {
            return None;
        }

        let mut best: Option<f64> = None;
        candidate.visit_fields(&mut |field, value| {
            if let Some(cost) = self.pattern.cost(value, &self.options) {
                let weighted = cost.max(MIN_COST) * field.weight();
                best = Some(best.map_or(weighted, |current| current.min(weighted)));
            }
        });
        best
    }

    /// Score a whole pool, keeping only matches and preserving pool order.
    pub fn score_pool<'c, T>(&self, pool: &[T]) -> Vec<Scored<T>>
    where
        T: Scorable<'c> + Copy,
    {
        pool.iter()
            .filter_map(|&item| self.score(&item).map(|score| Scored { item, score }))
            .collect()
    }
}
