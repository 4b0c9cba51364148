//! Configuration management for the Lectern verse service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{LecternError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Corpus layout configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Root directory containing one subdirectory per book
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,

    /// Literal filename prefix of chapter files
    #[serde(default = "default_chapter_prefix")]
    pub chapter_prefix: String,

    /// Chapter file extension (without the dot)
    #[serde(default = "default_chapter_extension")]
    pub chapter_extension: String,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Default number of results to return
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Maximum results per query
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,

    /// Verses on each side of a match in the context window
    #[serde(default = "default_context_size")]
    pub context_size: usize,

    /// Default number of autocomplete suggestions
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions
fn default_root_dir() -> PathBuf {
    PathBuf::from("./corpus")
}

fn default_chapter_prefix() -> String {
    "chapter-".to_string()
}

fn default_chapter_extension() -> String {
    "md".to_string()
}

fn default_limit() -> usize {
    50
}

fn default_max_limit() -> usize {
    200
}

fn default_context_size() -> usize {
    2
}

fn default_suggestion_limit() -> usize {
    10
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    7878
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            chapter_prefix: default_chapter_prefix(),
            chapter_extension: default_chapter_extension(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            context_size: default_context_size(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| LecternError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Create default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File locations, in order:
    /// 1. LECTERN_CONFIG env var
    /// 2. ./lectern.toml
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("LECTERN_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new("lectern.toml").exists() {
            Self::from_file("lectern.toml")?
        } else {
            Self::default()
        };

        // Override with environment variables
        config.merge_env();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Corpus configuration
        if let Ok(root) = env::var("LECTERN_CORPUS_DIR") {
            self.corpus.root_dir = PathBuf::from(root);
        }
        if let Ok(prefix) = env::var("LECTERN_CHAPTER_PREFIX") {
            self.corpus.chapter_prefix = prefix;
        }
        if let Ok(ext) = env::var("LECTERN_CHAPTER_EXTENSION") {
            self.corpus.chapter_extension = ext;
        }

        // Search configuration
        if let Ok(limit) = env::var("LECTERN_DEFAULT_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.search.default_limit = l;
            }
        }
        if let Ok(max) = env::var("LECTERN_MAX_LIMIT") {
            if let Ok(m) = max.parse() {
                self.search.max_limit = m;
            }
        }
        if let Ok(ctx) = env::var("LECTERN_CONTEXT_SIZE") {
            if let Ok(c) = ctx.parse() {
                self.search.context_size = c;
            }
        }
        if let Ok(sugg) = env::var("LECTERN_SUGGESTION_LIMIT") {
            if let Ok(s) = sugg.parse() {
                self.search.suggestion_limit = s;
            }
        }

        // Server configuration
        if let Ok(host) = env::var("LECTERN_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("LECTERN_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.corpus.chapter_prefix.is_empty() {
            return Err(LecternError::ConfigError(
                "Chapter prefix must be non-empty".to_string(),
            ));
        }

        if self.corpus.chapter_extension.is_empty() {
            return Err(LecternError::ConfigError(
                "Chapter extension must be non-empty".to_string(),
            ));
        }

        if self.search.default_limit == 0 {
            return Err(LecternError::ConfigError(
                "Default limit must be non-zero".to_string(),
            ));
        }

        if self.search.default_limit > self.search.max_limit {
            return Err(LecternError::ConfigError(
                "Default limit cannot exceed max limit".to_string(),
            ));
        }

        if self.search.suggestion_limit == 0 {
            return Err(LecternError::ConfigError(
                "Suggestion limit must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration at startup
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Corpus root: {:?}", self.corpus.root_dir);
        tracing::info!(
            "  Chapter files: {}NN.{}",
            self.corpus.chapter_prefix,
            self.corpus.chapter_extension
        );
        tracing::info!("  Default limit: {}", self.search.default_limit);
        tracing::info!("  Max limit: {}", self.search.max_limit);
        tracing::info!("  Context size: {}", self.search.context_size);
        tracing::info!("  Suggestion limit: {}", self.search.suggestion_limit);
        tracing::info!("  Server: {}:{}", self.server.host, self.server.port);
    }
}
