//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::{DocumentStore, QuoteStore, ReviewStore, SettingsStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the three collection managers, which all share one
/// [`DocumentStore`] rooted at the configured data directory.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    settings: SettingsStore,
    reviews: ReviewStore,
    quotes: QuoteStore,
}

impl AppState {
    /// Create application state over the configured data directory.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let store = DocumentStore::new(config.data_dir.clone());

        Self {
            inner: Arc::new(AppStateInner {
                settings: SettingsStore::new(store.clone()),
                reviews: ReviewStore::new(store.clone()),
                quotes: QuoteStore::new(store),
                config,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the settings manager.
    #[must_use]
    pub fn settings(&self) -> &SettingsStore {
        &self.inner.settings
    }

    /// Get a reference to the reviews manager.
    #[must_use]
    pub fn reviews(&self) -> &ReviewStore {
        &self.inner.reviews
    }

    /// Get a reference to the quotes manager.
    #[must_use]
    pub fn quotes(&self) -> &QuoteStore {
        &self.inner.quotes
    }
}
