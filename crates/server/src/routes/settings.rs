//! Settings route handlers.
//!
//! The settings document drives the FAQ page and the contact details block;
//! the admin form replaces it wholesale on save.

use axum::{Json, extract::State};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use brickline_core::SettingsDocument;

use crate::error::Result;
use crate::state::AppState;

/// Response for a successful settings update.
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub ok: bool,
}

/// Fetch the current settings document.
///
/// GET /api/settings
pub async fn show(State(state): State<AppState>) -> Result<Json<SettingsDocument>> {
    Ok(Json(state.settings().get().await?))
}

/// Replace the settings document.
///
/// POST /api/settings
#[instrument(skip_all)]
pub async fn update(
    State(state): State<AppState>,
    Json(raw): Json<Value>,
) -> Result<Json<UpdateResponse>> {
    let stored = state.settings().replace(&raw).await?;
    tracing::info!(faqs = stored.faqs.len(), "Settings replaced");
    Ok(Json(UpdateResponse { ok: true }))
}
