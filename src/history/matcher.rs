use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Fuzzy filter over history entries
#[derive(Default)]
pub struct HistoryMatcher {
    skim: SkimMatcherV2,
}

impl fmt::Debug for HistoryMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryMatcher").finish_non_exhaustive()
    }
}

impl HistoryMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices of matching entries, best match first. Equal scores keep the
    /// newer (higher index) entry first. An empty query matches everything,
    /// newest first.
    pub fn filter(&self, query: &str, entries: &[String]) -> Vec<usize> {
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return (0..entries.len()).rev().collect();
        }

        let mut hits: Vec<(i64, usize)> = entries
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| self.score(entry, &terms).map(|score| (score, idx)))
            .collect();

        // Highest score first, then newest
        hits.sort_unstable_by(|a, b| b.cmp(a));
        hits.into_iter().map(|(_, idx)| idx).collect()
    }

    /// Summed score when every term matches somewhere in `entry`
    fn score(&self, entry: &str, terms: &[&str]) -> Option<i64> {
        terms
            .iter()
            .map(|term| self.skim.fuzzy_match(entry, term))
            .sum()
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
