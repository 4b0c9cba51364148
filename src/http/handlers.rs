//! HTTP request handlers for the Lectern API
//!
//! Implements handlers for the 5 REST endpoints: health, search,
//! suggest, books, and reindex. Engine calls run on the blocking
//! pool because a lazy build reads the corpus from disk.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::core::error::LecternError;
use crate::core::services::Services;
use crate::core::types::*;

/// Query-string parameters for `/api/v1/search`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query
    pub q: String,

    /// Restrict to one book (exact id)
    pub book: Option<String>,

    /// Maximum number of results
    pub limit: Option<usize>,

    /// Attach context windows (default true)
    pub context: Option<bool>,
}

/// Query-string parameters for `/api/v1/suggest`
#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    /// Word prefix
    pub q: String,

    /// Maximum number of suggestions
    pub limit: Option<usize>,
}

/// Health check handler
///
/// Returns server status and version information.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Search handler
///
/// Maps `q`, `book`, `limit` and `context` onto a search engine
/// call. Queries shorter than two characters yield an empty result
/// set, not an error.
pub async fn search_handler(
    State(services): State<Arc<Services>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, LecternError> {
    let opts = SearchOptions {
        book: params.book,
        limit: params
            .limit
            .unwrap_or(services.config.search.default_limit),
        include_context: params.context.unwrap_or(true),
        context_size: services.config.search.context_size,
    };

    let response = run_blocking(move |services| services.search.search(&params.q, &opts), &services)
        .await?;

    Ok(Json(response))
}

/// Suggestion handler
///
/// Returns autocomplete suggestions for a word prefix.
pub async fn suggest_handler(
    State(services): State<Arc<Services>>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<SuggestResponse>, LecternError> {
    let limit = params
        .limit
        .unwrap_or(services.config.search.suggestion_limit);
    let prefix = params.q.trim().to_string();

    let suggestions = {
        let prefix = prefix.clone();
        run_blocking(move |services| services.suggest.suggest(&prefix, limit), &services).await?
    };

    Ok(Json(SuggestResponse {
        prefix,
        suggestions,
    }))
}

/// Books handler
///
/// Lists the discovered books of the corpus, sorted by name.
pub async fn books_handler(
    State(services): State<Arc<Services>>,
) -> Result<Json<BooksResponse>, LecternError> {
    let books =
        run_blocking(move |services| services.index.loader().discover_books(), &services).await?;

    Ok(Json(BooksResponse { books }))
}

/// Reindex handler
///
/// Rebuilds the index from the corpus and returns build statistics.
pub async fn reindex_handler(
    State(services): State<Arc<Services>>,
) -> Result<Json<BuildStats>, LecternError> {
    let stats = run_blocking(move |services| services.index.rebuild(), &services).await?;

    Ok(Json(stats))
}

/// Run an engine call on the blocking pool
async fn run_blocking<T, F>(f: F, services: &Arc<Services>) -> Result<T, LecternError>
where
    T: Send + 'static,
    F: FnOnce(Arc<Services>) -> Result<T, LecternError> + Send + 'static,
{
    let services = Arc::clone(services);
    tokio::task::spawn_blocking(move || f(services))
        .await
        .map_err(|e| LecternError::SearchFailed(format!("Task join error: {e}")))?
}
