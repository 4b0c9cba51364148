//! Lectern - Verse Search Engine for Scripture Corpora
//!
//! A reading and full-text search service for line-structured
//! scripture text: one directory per book, one file per chapter,
//! one verse per line. Search is an in-memory, heuristically
//! ranked substring engine with context windows, highlighting and
//! prefix autocomplete.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types
//!   - corpus (book/chapter discovery)
//!   - parser (chapter text to verses)
//!   - index (verse store, build lifecycle)
//!   - search (filtering, scoring, context, highlighting)
//!   - suggest (prefix autocomplete)
//!   - services (unified service container)
//!
//! - **http**: REST API adapter (depends on core)
//!   - handlers, middleware
//!
//! - **cli**: clap adapter (depends on core)
//!   - commands, output
//!
//! # Key Properties
//!
//! - Deterministic heuristic ranking (no IDF, no persistence)
//! - Lazy index builds with an Empty/Building/Ready state machine
//! - Readers always see a point-in-time-consistent snapshot

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{LecternError, Result};
pub use core::services::Services;
pub use core::types::*;
