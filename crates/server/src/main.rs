//! Brickline - business-site backend for a building-materials shop.
//!
//! This binary serves the JSON API and the static storefront on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework
//! - Flat JSON documents under a data directory (settings, reviews, quotes)
//! - Static multi-language frontend served with an `index.html` fallback
//!
//! There is no database: each collection is one JSON file, re-read on every
//! operation and replaced in full on every write. The expected write volume
//! is a small shop's review and quote traffic.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

mod config;
mod error;
mod middleware;
mod routes;
mod state;
mod store;

use config::ServerConfig;
use state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Maximum accepted request body size (the documents themselves stay far
/// smaller than this).
const MAX_BODY_BYTES: usize = 512 * 1024;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "brickline_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build application state (collection managers over the data directory)
    let state = AppState::new(config.clone());

    // Build router: API under /api, rate limited as a group
    let mut app = Router::new()
        .nest(
            "/api",
            routes::api_routes().layer(middleware::api_rate_limiter()),
        )
        .with_state(state);

    // Static frontend with index.html fallback for client-side routes
    if let Some(dir) = config.frontend_dir.as_ref() {
        let index = ServeFile::new(dir.join("index.html"));
        app = app.fallback_service(ServeDir::new(dir).fallback(index));
        tracing::info!(dir = %dir.display(), "Serving static frontend");
    }

    let app = app
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.socket_addr();
    tracing::info!("brickline server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
