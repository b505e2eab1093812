//! HTTP route handlers for the Brickline API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /api/health        - Liveness probe
//! GET  /api/config        - Shop identity for the frontend
//! GET  /api/products      - Static product category catalog
//!
//! # Settings
//! GET  /api/settings      - Current settings document
//! POST /api/settings      - Replace settings (admin form)
//!
//! # Reviews
//! GET  /api/reviews       - All reviews, newest first
//! POST /api/reviews       - Submit a review
//!
//! # Quotes
//! GET  /api/quotes        - All quote requests, newest first
//! GET  /api/quotes/{id}   - One quote request by id
//! POST /api/quotes        - Submit a quote request
//! ```

pub mod catalog;
pub mod quotes;
pub mod reviews;
pub mod settings;

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Health check payload.
#[derive(Debug, Serialize)]
pub struct Health {
    pub ok: bool,
    pub service: &'static str,
}

/// Liveness health check endpoint.
///
/// Confirms the process is up; it does not touch the data directory.
async fn health() -> Json<Health> {
    Json(Health {
        ok: true,
        service: "Brickline API",
    })
}

/// Create all API routes. The caller nests this under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/config", get(catalog::site_config))
        .route("/products", get(catalog::products))
        .route("/settings", get(settings::show).post(settings::update))
        .route("/reviews", get(reviews::index).post(reviews::create))
        .route("/quotes", get(quotes::index).post(quotes::create))
        .route("/quotes/{id}", get(quotes::show))
}
