//! Query execution: filtering, scoring, sorting, context assembly.

use std::sync::Arc;
use std::time::Instant;

use crate::core::error::Result;
use crate::core::index::VerseIndex;
use crate::core::search::highlight::highlight;
use crate::core::search::score::score_verse;
use crate::core::types::{SearchOptions, SearchResponse, Verse, VerseHit, VerseKey, VerseStore};

/// Queries shorter than this (after trimming) return no results.
/// That is a policy decision, not an error.
pub const MIN_QUERY_CHARS: usize = 2;

/// Verse search engine over a shared index
pub struct SearchEngine {
    index: Arc<VerseIndex>,
    max_limit: usize,
}

impl SearchEngine {
    /// Create a new search engine
    pub fn new(index: Arc<VerseIndex>, max_limit: usize) -> Self {
        Self { index, max_limit }
    }

    /// Execute a search query.
    ///
    /// Triggers a lazy index build when the index is not ready. A
    /// verse qualifies when its text contains the whole trimmed
    /// query case-insensitively and, if a book filter is given, its
    /// book matches exactly.
    pub fn search(&self, query: &str, opts: &SearchOptions) -> Result<SearchResponse> {
        let start = Instant::now();

        let trimmed = query.trim();
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            return Ok(SearchResponse::empty(trimmed));
        }

        let store = self.index.ensure_ready()?;
        let needle = trimmed.to_lowercase();
        let limit = opts.limit.min(self.max_limit);

        // Candidates in store order, so the later stable sort keeps
        // canonical order among equal scores
        let mut candidates: Vec<(&Verse, u32)> = Vec::new();
        for verse in store.values() {
            if let Some(book) = &opts.book {
                if verse.book != *book {
                    continue;
                }
            }
            if !verse.text.to_lowercase().contains(&needle) {
                continue;
            }
            candidates.push((verse, score_verse(&verse.text, trimmed)));
        }

        let total = candidates.len();
        candidates.sort_by(|a, b| b.1.cmp(&a.1));
        candidates.truncate(limit);

        let results: Vec<VerseHit> = candidates
            .into_iter()
            .map(|(verse, score)| VerseHit {
                book: verse.book.clone(),
                chapter: verse.chapter,
                verse: verse.verse,
                text: verse.text.clone(),
                full_text: verse.full_text.clone(),
                score,
                highlighted: highlight(&verse.text, trimmed),
                context: if opts.include_context {
                    context_window(&store, verse, opts.context_size)
                } else {
                    Vec::new()
                },
            })
            .collect();

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(
            query = %trimmed,
            total,
            returned = results.len(),
            duration_ms,
            "Search completed"
        );

        Ok(SearchResponse {
            query: trimmed.to_string(),
            has_more: total > results.len(),
            results,
            total,
            duration_ms,
        })
    }
}

/// Collect the inclusive context window around a verse: all verses
/// of its chapter in ascending order, clipped to
/// `[k - size, k + size]` around the target's position `k`.
fn context_window(store: &VerseStore, target: &Verse, size: usize) -> Vec<Verse> {
    let chapter: Vec<&Verse> = store
        .range(
            VerseKey::chapter_start(&target.book, target.chapter)
                ..=VerseKey::chapter_end(&target.book, target.chapter),
        )
        .map(|(_, v)| v)
        .collect();

    let Some(k) = chapter.iter().position(|v| v.verse == target.verse) else {
        return Vec::new();
    };

    let from = k.saturating_sub(size);
    let to = (k + size).min(chapter.len() - 1);

    chapter[from..=to].iter().map(|v| (*v).clone()).collect()
}
