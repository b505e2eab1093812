//! Review route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::Value;
use tracing::instrument;

use brickline_core::{ReviewRecord, ReviewsDocument};

use crate::error::Result;
use crate::state::AppState;

/// List all reviews, newest first.
///
/// GET /api/reviews
pub async fn index(State(state): State<AppState>) -> Result<Json<ReviewsDocument>> {
    let reviews = state.reviews().list().await?;
    Ok(Json(ReviewsDocument { reviews }))
}

/// Submit a review.
///
/// POST /api/reviews
///
/// Responds 201 with the stored record, including its assigned id and
/// timestamp, so the frontend can render it in place.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    Json(raw): Json<Value>,
) -> Result<(StatusCode, Json<ReviewRecord>)> {
    let record = state.reviews().append(&raw).await?;
    tracing::info!(id = %record.id, rating = record.rating, "Review stored");
    Ok((StatusCode::CREATED, Json(record)))
}
