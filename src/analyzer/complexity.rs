use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;

/// Decision-point keywords, in scoring order.
const DECISION_KEYWORDS: [&str; 9] = [
    "if", "elif", "else", "for", "while", "except", "with", "and", "or",
];

/// A complexity estimate with its per-keyword breakdown.
///
/// `decision_points` iterates in [`DECISION_KEYWORDS`] order and its counts
/// sum to `score - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexityReport {
    pub score: usize,
    pub decision_points: IndexMap<&'static str, usize>,
}

/// Cyclomatic-complexity heuristic: base score 1, plus one per
/// word-boundary-delimited occurrence of a decision keyword.
///
/// Occurrences inside strings and comments count too; this deliberate
/// overcounting is part of the heuristic.
pub struct ComplexityEstimator {
    patterns: Vec<(&'static str, Regex)>,
}

impl Default for ComplexityEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplexityEstimator {
    #[must_use]
    pub fn new() -> Self {
        let patterns = DECISION_KEYWORDS
            .iter()
            .map(|kw| {
                (
                    *kw,
                    Regex::new(&format!(r"\b{kw}\b")).expect("Invalid regex"),
                )
            })
            .collect();
        Self { patterns }
    }

    /// Estimated score for `content`, always at least 1.
    #[must_use]
    pub fn score(&self, content: &str) -> usize {
        1 + self
            .patterns
            .iter()
            .map(|(_, pattern)| pattern.find_iter(content).count())
            .sum::<usize>()
    }

    /// Score plus the per-keyword occurrence counts, in keyword order.
    #[must_use]
    pub fn report(&self, content: &str) -> ComplexityReport {
        let mut decision_points = IndexMap::with_capacity(self.patterns.len());
        let mut score = 1;

        for (keyword, pattern) in &self.patterns {
            let count = pattern.find_iter(content).count();
            score += count;
            decision_points.insert(*keyword, count);
        }

        ComplexityReport {
            score,
            decision_points,
        }
    }
}

#[cfg(test)]
#[path = "complexity_tests.rs"]
mod tests;
