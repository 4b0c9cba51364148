//! Unified service container for Lectern
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::corpus::CorpusLoader;
use crate::core::error::Result;
use crate::core::index::VerseIndex;
use crate::core::search::SearchEngine;
use crate::core::suggest::SuggestionEngine;
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Verse index owning the store and its lifecycle
    pub index: Arc<VerseIndex>,

    /// Search engine for ranked verse queries
    pub search: Arc<SearchEngine>,

    /// Suggestion engine for autocomplete
    pub suggest: Arc<SuggestionEngine>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Result<Self> {
        let loader = CorpusLoader::new(
            config.corpus.root_dir.clone(),
            &config.corpus.chapter_prefix,
            &config.corpus.chapter_extension,
        )?;
        let index = Arc::new(VerseIndex::new(loader));

        let search = Arc::new(SearchEngine::new(
            Arc::clone(&index),
            config.search.max_limit,
        ));
        let suggest = Arc::new(SuggestionEngine::new(Arc::clone(&index)));

        Ok(Self {
            index,
            search,
            suggest,
            config: Arc::new(config),
        })
    }
}
