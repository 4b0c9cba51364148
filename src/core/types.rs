//! Core data types for the Lectern verse service.
//!
//! This module defines all data structures used throughout the
//! application: verses, search options, results, responses, and
//! build statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unique address of a verse within the corpus.
///
/// Ordering is (book, chapter, verse), which is also the canonical
/// iteration order of the verse store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VerseKey {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl VerseKey {
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
        }
    }

    /// Smallest key of a chapter, for range scans
    pub fn chapter_start(book: &str, chapter: u32) -> Self {
        Self::new(book, chapter, 0)
    }

    /// Largest key of a chapter, for range scans
    pub fn chapter_end(book: &str, chapter: u32) -> Self {
        Self::new(book, chapter, u32::MAX)
    }
}

/// A single verse parsed from a chapter file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Book identifier (directory name)
    pub book: String,

    /// Chapter number (parsed from the chapter filename)
    pub chapter: u32,

    /// Verse number (parsed from the verse marker)
    pub verse: u32,

    /// Verse body with the marker stripped
    pub text: String,

    /// Original source line, trimmed, used for display
    pub full_text: String,
}

impl Verse {
    /// Store key for this verse
    pub fn key(&self) -> VerseKey {
        VerseKey::new(self.book.clone(), self.chapter, self.verse)
    }
}

/// The verse store owned by the index.
///
/// BTreeMap iteration gives the canonical (book, chapter, verse)
/// order that ranking ties and context assembly rely on.
pub type VerseStore = BTreeMap<VerseKey, Verse>;

/// Options controlling a search query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Restrict results to this book (exact match)
    pub book: Option<String>,

    /// Maximum number of results to return
    pub limit: usize,

    /// Attach a context window of neighboring verses
    pub include_context: bool,

    /// Number of verses on each side of the target
    pub context_size: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            book: None,
            limit: 50,
            include_context: true,
            context_size: 2,
        }
    }
}

/// A single ranked search result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerseHit {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,

    /// Verse body (marker stripped)
    pub text: String,

    /// Original source line for display
    pub full_text: String,

    /// Heuristic relevance score; comparable only within one query
    pub score: u32,

    /// Verse text with query words wrapped in highlight markers
    pub highlighted: String,

    /// Neighboring verses (ascending, includes the target itself);
    /// empty when context was not requested
    pub context: Vec<Verse>,
}

/// Response from a search operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Trimmed query string
    pub query: String,

    /// Ranked results, at most `limit`
    pub results: Vec<VerseHit>,

    /// Number of qualifying verses before truncation
    pub total: usize,

    /// Whether results were truncated by the limit
    pub has_more: bool,

    /// Query duration in milliseconds
    pub duration_ms: u64,
}

impl SearchResponse {
    /// Empty response, used for queries below the minimum length
    pub fn empty(query: &str) -> Self {
        Self {
            query: query.to_string(),
            results: Vec::new(),
            total: 0,
            has_more: false,
            duration_ms: 0,
        }
    }
}

/// Response from a suggestion lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResponse {
    /// Trimmed prefix the suggestions were drawn for
    pub prefix: String,

    /// Distinct lowercase words starting with the prefix
    pub suggestions: Vec<String>,
}

/// Statistics from an index build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildStats {
    /// Number of books discovered
    pub books: usize,

    /// Chapter files parsed into the store
    pub chapters_indexed: usize,

    /// Chapter files skipped because they could not be read
    pub chapters_skipped: usize,

    /// Verses in the resulting store
    pub verses: usize,

    /// Build duration in milliseconds
    pub duration_ms: u64,

    /// Completion timestamp
    pub built_at: DateTime<Utc>,
}

/// Response from listing books
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BooksResponse {
    pub books: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}
