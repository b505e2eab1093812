//! Quote-request route handlers.
//!
//! Quote requests come from the contact flow: the customer picks a topic,
//! leaves a callback number, and the shop follows up over phone or WhatsApp.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;
use tracing::instrument;

use brickline_core::{QuoteRecord, QuotesDocument};

use crate::error::Result;
use crate::state::AppState;

/// List all quote requests, newest first.
///
/// GET /api/quotes
pub async fn index(State(state): State<AppState>) -> Result<Json<QuotesDocument>> {
    let quotes = state.quotes().list().await?;
    Ok(Json(QuotesDocument { quotes }))
}

/// Fetch one quote request by id.
///
/// GET /api/quotes/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuoteRecord>> {
    Ok(Json(state.quotes().get(&id).await?))
}

/// Submit a quote request.
///
/// POST /api/quotes
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    Json(raw): Json<Value>,
) -> Result<(StatusCode, Json<QuoteRecord>)> {
    let record = state.quotes().append(&raw).await?;
    tracing::info!(id = %record.id, topic = %record.topic, "Quote request stored");
    Ok((StatusCode::CREATED, Json(record)))
}
