//! Rate limiting middleware using governor and `tower_governor`.
//!
//! One limiter covers the whole `/api` surface. The budget is generous for
//! a browsing session but low enough to blunt form-spam on the review and
//! quote endpoints.

use std::sync::Arc;

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Rate limiter layer type for Axum.
///
/// Uses `SmartIpKeyExtractor` to get the real client IP from the usual
/// proxy headers before falling back to the peer address, so the server
/// behaves the same behind a reverse proxy and when exposed directly.
pub type RateLimiterLayer =
    GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Create the `/api` rate limiter: ~200 requests per minute per IP.
///
/// Configuration: 1 token replenished every 300ms, burst of 40.
///
/// # Panics
///
/// This function will not panic. The configuration uses only valid positive
/// integers (`per_millisecond(300)` and `burst_size(40)`), which are always
/// accepted by `GovernorConfigBuilder`.
#[must_use]
pub fn api_rate_limiter() -> RateLimiterLayer {
    let config = GovernorConfigBuilder::default()
        .key_extractor(SmartIpKeyExtractor)
        .per_millisecond(300) // Replenish 1 token every 300ms (~200/minute)
        .burst_size(40) // Allow burst of 40 requests
        .finish()
        .expect("rate limiter config with per_millisecond(300) and burst_size(40) is valid");
    GovernorLayer::new(Arc::new(config))
}
