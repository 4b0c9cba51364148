//! CLI command implementations

pub mod books;
pub mod build;
pub mod completions;
pub mod search;
pub mod suggest;
