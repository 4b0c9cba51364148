//! Verse search: query execution, scoring, highlighting

pub mod engine;
pub mod highlight;
pub mod score;

pub use engine::{SearchEngine, MIN_QUERY_CHARS};
pub use highlight::{highlight, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
pub use score::score_verse;
