//! Heuristic relevance scoring.
//!
//! The score is a pure function of (verse text, query) so it can be
//! tested in isolation. It is meaningful only relative to other
//! results of the same query. The weights are part of the engine's
//! contract and are not tunable:
//!
//! - +100 for containing the query at all (candidates always do)
//! - per (query word, verse word) pair: +50 for an exact
//!   case-insensitive match, else +25 when the verse word contains
//!   the query word; exact takes precedence per pair, and bonuses
//!   accumulate across all pairs
//! - +10 when the verse text is under 100 characters

/// Flat bonus for the containment condition
pub const BASE_BONUS: u32 = 100;

/// Bonus per exact word pair
pub const EXACT_WORD_BONUS: u32 = 50;

/// Bonus per substring word pair
pub const PARTIAL_WORD_BONUS: u32 = 25;

/// Bonus for short verses
pub const SHORT_VERSE_BONUS: u32 = 10;

/// Character count below which a verse counts as short
pub const SHORT_VERSE_LIMIT: usize = 100;

/// Score a candidate verse against a trimmed query
pub fn score_verse(text: &str, query: &str) -> u32 {
    let mut score = BASE_BONUS;

    let verse_words: Vec<String> = text
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();

    for query_word in query.split_whitespace() {
        let query_word = query_word.to_lowercase();
        for verse_word in &verse_words {
            if *verse_word == query_word {
                score += EXACT_WORD_BONUS;
            } else if verse_word.contains(&query_word) {
                score += PARTIAL_WORD_BONUS;
            }
        }
    }

    if text.chars().count() < SHORT_VERSE_LIMIT {
        score += SHORT_VERSE_BONUS;
    }

    score
}
