//! Query highlighting.
//!
//! Each query word is substituted in turn: every case-insensitive
//! occurrence in the verse text is wrapped in `<mark>` markers, and
//! each substitution runs on the string produced by the previous
//! one. When one query word occurs inside text already wrapped by
//! an earlier word, the markers nest; that behavior is intentional
//! and kept as-is.
//!
//! Matching is character-based so multi-byte text never splits a
//! UTF-8 sequence.

/// Opening highlight marker
pub const HIGHLIGHT_OPEN: &str = "<mark>";

/// Closing highlight marker
pub const HIGHLIGHT_CLOSE: &str = "</mark>";

/// Wrap every case-insensitive occurrence of each query word, in
/// query order, applying substitutions sequentially.
pub fn highlight(text: &str, query: &str) -> String {
    let mut out = text.to_string();
    for word in query.split_whitespace() {
        out = wrap_occurrences(&out, word);
    }
    out
}

/// One substitution pass: wrap non-overlapping occurrences of
/// `word`, left to right.
fn wrap_occurrences(text: &str, word: &str) -> String {
    let needle: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + 2 * HIGHLIGHT_OPEN.len());
    let mut cursor = 0;

    while cursor < text.len() {
        match find_from(text, cursor, &needle) {
            Some((start, end)) => {
                out.push_str(&text[cursor..start]);
                out.push_str(HIGHLIGHT_OPEN);
                out.push_str(&text[start..end]);
                out.push_str(HIGHLIGHT_CLOSE);
                cursor = end;
            }
            None => {
                out.push_str(&text[cursor..]);
                break;
            }
        }
    }

    out
}

/// Find the first case-insensitive occurrence of `needle` at or
/// after byte offset `from`; returns its byte range.
fn find_from(text: &str, from: usize, needle: &[char]) -> Option<(usize, usize)> {
    for (offset, _) in text[from..].char_indices() {
        let start = from + offset;
        if let Some(end) = match_at(text, start, needle) {
            return Some((start, end));
        }
    }
    None
}

/// Try to match `needle` at byte offset `at`; returns the end
/// offset of the matched text. Comparison lowercases the text one
/// character at a time, and a match must consume whole characters.
fn match_at(text: &str, at: usize, needle: &[char]) -> Option<usize> {
    let mut consumed = 0;
    let mut ni = 0;

    for ch in text[at..].chars() {
        for lowered in ch.to_lowercase() {
            if ni == needle.len() {
                // Lowercase expansion spills past the needle
                return None;
            }
            if needle[ni] != lowered {
                return None;
            }
            ni += 1;
        }
        consumed += ch.len_utf8();
        if ni == needle.len() {
            return Some(at + consumed);
        }
    }

    None
}
