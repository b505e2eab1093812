//! Unified error handling for the API.
//!
//! Provides a single `AppError` that maps every failure to the right status
//! code and a `{ "error": ... }` body. All route handlers return
//! `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use brickline_core::ValidationError;

use crate::store::StoreError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client input failed a validation rule. The message is client-facing.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Lookup miss for a named resource.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Document storage failed (I/O or corrupt data).
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Storage failures are operator problems; log the detail here and
        // keep the client body generic.
        if matches!(self, Self::Store(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            Self::Store(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
