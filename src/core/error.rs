//! Error types and error handling for the Lectern verse service.
//!
//! This module defines the error types used throughout the
//! application. HTTP status mapping lives in the `http` adapter.
//!
//! Note that short search queries are deliberately NOT an error:
//! the query engine answers them with an empty result set.

use thiserror::Error;

/// Result type alias for Lectern operations
pub type Result<T> = std::result::Result<T, LecternError>;

/// Main error type for the Lectern service
#[derive(Error, Debug)]
pub enum LecternError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Build failed: {0}")]
    BuildFailed(String),

    #[error("Search failed: {0}")]
    SearchFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl LecternError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, LecternError::NotFound(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, LecternError::ConfigError(_))
    }
}
