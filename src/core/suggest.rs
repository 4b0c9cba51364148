//! Prefix-based autocomplete over verse text.
//!
//! Suggestions are distinct lowercase words drawn from the verse
//! bodies, strictly longer than the prefix and starting with it
//! (case-insensitive). Collection stops as soon as the limit is
//! reached; which qualifying words are returned beyond that is
//! iteration-order dependent and unspecified.

use std::collections::HashSet;
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::index::VerseIndex;

/// Autocomplete engine over a shared index
pub struct SuggestionEngine {
    index: Arc<VerseIndex>,
}

impl SuggestionEngine {
    /// Create a new suggestion engine
    pub fn new(index: Arc<VerseIndex>) -> Self {
        Self { index }
    }

    /// Collect up to `limit` suggestions for `prefix`.
    ///
    /// Triggers a lazy index build when the index is not ready.
    /// Words are trimmed of leading and trailing punctuation before
    /// comparison, so "beginning," suggests "beginning".
    pub fn suggest(&self, prefix: &str, limit: usize) -> Result<Vec<String>> {
        let trimmed = prefix.trim();
        if trimmed.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let store = self.index.ensure_ready()?;
        let prefix_lower = trimmed.to_lowercase();
        let prefix_chars = prefix_lower.chars().count();

        let mut seen = HashSet::new();
        let mut suggestions = Vec::new();

        'corpus: for verse in store.values() {
            for word in verse.text.split_whitespace() {
                let word = word
                    .trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase();

                // Strictly longer than the prefix, never the prefix itself
                if word.chars().count() <= prefix_chars {
                    continue;
                }
                if !word.starts_with(&prefix_lower) {
                    continue;
                }

                if seen.insert(word.clone()) {
                    suggestions.push(word);
                    if suggestions.len() >= limit {
                        break 'corpus;
                    }
                }
            }
        }

        Ok(suggestions)
    }
}
