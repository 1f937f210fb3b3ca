//! Fuzzy filtering for hosts reacting to a settled search.
//!
//! The picker itself never filters; it only reports the search text. Hosts
//! use [`Matcher`] to narrow their item list and hand it back to the picker.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Case-insensitive fuzzy matcher.
pub struct Matcher {
    inner: SkimMatcherV2,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher").finish_non_exhaustive()
    }
}

impl Matcher {
    pub fn new() -> Self {
        Self {
            inner: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// Match score of `pattern` against `text`, higher is better.
    pub fn score(&self, text: &str, pattern: &str) -> Option<i64> {
        self.inner.fuzzy_match(text, pattern)
    }

    /// Items matching `pattern`, best match first. Ties keep source order and
    /// an empty pattern keeps every item.
    pub fn filter<T: AsRef<str> + Clone>(&self, items: &[T], pattern: &str) -> Vec<T> {
        if pattern.is_empty() {
            return items.to_vec();
        }

        let mut scored: Vec<(i64, &T)> = items
            .iter()
            .filter_map(|item| self.score(item.as_ref(), pattern).map(|score| (score, item)))
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, item)| item.clone()).collect()
    }
}
