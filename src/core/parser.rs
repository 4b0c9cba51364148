//! Verse parsing for chapter files.
//!
//! A chapter file is line-structured text. Blank lines and `#`
//! header lines are skipped (the first header is available to the
//! serving layer as a chapter title, but is never indexed). A line
//! is a verse when, after an optional bold marker, it starts with a
//! verse number followed by a period or whitespace:
//!
//! ```text
//! # Chapter 1
//!
//! 1. In the beginning God created the heaven and the earth.
//! **2** And the earth was without form, and void.
//! ```
//!
//! Lines that match neither form are discarded, not appended to the
//! previous verse. Multi-line verses in the source are therefore
//! represented only by their first line.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::types::Verse;

// Optional bold markers around the verse number, then a
// period-or-whitespace separator and the body.
static VERSE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\*\*)?([0-9]+)(?:\*\*)?[.\s]\s*(.*)$").unwrap());

static HEADER_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#+\s*(.*)$").unwrap());

/// Parse one chapter's raw text into verse records.
///
/// Duplicate verse numbers within the chapter are both emitted, in
/// line order; the store's insert resolves them last-write-wins.
pub fn parse_chapter(raw: &str, book: &str, chapter: u32) -> Vec<Verse> {
    let mut verses = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(caps) = VERSE_LINE.captures(line) else {
            continue;
        };

        let Ok(number) = caps[1].parse::<u32>() else {
            continue;
        };
        // Verse numbering starts at 1
        if number == 0 {
            continue;
        }

        verses.push(Verse {
            book: book.to_string(),
            chapter,
            verse: number,
            text: caps[2].to_string(),
            full_text: line.to_string(),
        });
    }

    verses
}

/// Extract the chapter title from the first header line, if any
pub fn chapter_title(raw: &str) -> Option<String> {
    for line in raw.lines() {
        let line = line.trim();
        if let Some(caps) = HEADER_LINE.captures(line) {
            let title = caps[1].trim();
            if !title.is_empty() {
                return Some(title.to_string());
            }
        }
    }
    None
}
