//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (HTTP, CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **corpus**: Book and chapter file discovery
//! - **parser**: Chapter text to verse records
//! - **index**: Verse store with build lifecycle
//! - **search**: Ranked verse queries
//! - **suggest**: Prefix autocomplete
//! - **services**: Unified service container

pub mod config;
pub mod corpus;
pub mod error;
pub mod index;
pub mod parser;
pub mod search;
pub mod services;
pub mod suggest;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{LecternError, Result};
pub use services::Services;
