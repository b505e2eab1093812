//! Flat-file JSON document storage.
//!
//! Each collection is one JSON file under the configured data directory:
//! `settings.json`, `reviews.json`, `quotes.json`. The store holds no state
//! between calls - every operation re-reads its document from disk and every
//! write replaces the file in full, so there is no cache to invalidate.
//!
//! A plain read-modify-write over a shared file can lose updates when two
//! writers interleave (the second writer's base read misses the first
//! writer's entry). The collection managers therefore serialize their write
//! cycles behind a per-collection mutex; collections stay independent of
//! each other.

pub mod quotes;
pub mod reviews;
pub mod settings;

pub use quotes::QuoteStore;
pub use reviews::ReviewStore;
pub use settings::SettingsStore;

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors from the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("i/o failure on document '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The stored bytes do not parse as the document shape.
    ///
    /// Never auto-repaired: the file is left in place for inspection.
    #[error("corrupt document '{name}': {source}")]
    Corrupt {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Handle to the JSON documents under one data directory.
///
/// Constructed once from configuration and cloned into each collection
/// manager; nothing is touched on disk until the first access.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    data_dir: PathBuf,
}

impl DocumentStore {
    /// Create a store rooted at `data_dir`.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{name}.json"))
    }

    /// Guarantee that `<name>.json` exists, initializing it with `default`.
    ///
    /// Idempotent; also creates the data directory on first use. An existing
    /// file is never rewritten, even if its contents do not parse.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory or file cannot be created.
    pub async fn ensure_exists<T>(&self, name: &str, default: &T) -> Result<(), StoreError>
    where
        T: Serialize + Sync,
    {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|source| io_error(name, source))?;

        let path = self.path(name);
        let exists = tokio::fs::try_exists(&path)
            .await
            .map_err(|source| io_error(name, source))?;
        if exists {
            return Ok(());
        }

        let bytes = to_pretty_json(name, default)?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| io_error(name, source))
    }

    /// Load and parse the document, creating it from `default` first if absent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` on filesystem failure and
    /// `StoreError::Corrupt` if the stored bytes do not parse.
    pub async fn read<T>(&self, name: &str, default: &T) -> Result<T, StoreError>
    where
        T: Serialize + DeserializeOwned + Sync,
    {
        self.ensure_exists(name, default).await?;

        let raw = tokio::fs::read_to_string(self.path(name))
            .await
            .map_err(|source| io_error(name, source))?;

        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            name: name.to_owned(),
            source,
        })
    }

    /// Serialize `value` and replace the document in full.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` on filesystem failure.
    pub async fn write<T>(&self, name: &str, value: &T, default: &T) -> Result<(), StoreError>
    where
        T: Serialize + Sync,
    {
        self.ensure_exists(name, default).await?;

        let bytes = to_pretty_json(name, value)?;
        tokio::fs::write(self.path(name), bytes)
            .await
            .map_err(|source| io_error(name, source))
    }
}

fn io_error(name: &str, source: std::io::Error) -> StoreError {
    StoreError::Io {
        name: name.to_owned(),
        source,
    }
}

fn to_pretty_json<T: Serialize>(name: &str, value: &T) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec_pretty(value).map_err(|source| StoreError::Corrupt {
        name: name.to_owned(),
        source,
    })
}
