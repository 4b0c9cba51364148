//! HTTP REST adapter
//!
//! Depends only on core/. Never imports from cli/.
//!
//! Maps query-string parameters onto engine calls via the Axum web
//! framework, and maps `LecternError` onto HTTP status codes.

pub mod handlers;
pub mod middleware;

pub use handlers::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::error::LecternError;

/// Convert an error to the appropriate HTTP status code
pub fn status_code(err: &LecternError) -> StatusCode {
    match err {
        LecternError::NotFound(_) => StatusCode::NOT_FOUND,
        LecternError::ConfigError(_) => StatusCode::BAD_REQUEST,
        LecternError::BuildFailed(_)
        | LecternError::SearchFailed(_)
        | LecternError::IoError(_)
        | LecternError::SerdeError(_)
        | LecternError::TomlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Automatic error conversion in Axum handlers
impl IntoResponse for LecternError {
    fn into_response(self) -> Response {
        let status = status_code(&self);
        let message = self.message();

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
