//! Reviews collection manager.

use brickline_core::{RecordId, ReviewRecord, ReviewsDocument, validate_review};
use chrono::Utc;
use serde_json::Value;
use tokio::sync::Mutex;

use super::{DocumentStore, StoreError};
use crate::error::AppError;

const DOC: &str = "reviews";

/// Retention cap: the oldest entries past this are evicted on write.
pub const MAX_REVIEWS: usize = 100;

const ID_LEN: usize = 10;

/// Manager for the reviews collection.
///
/// Records are immutable once stored and kept newest-first.
pub struct ReviewStore {
    store: DocumentStore,
    // One writer at a time: the append cycle is read-modify-write over the
    // whole document, and unserialized appends can drop each other's entry.
    write_lock: Mutex<()>,
}

impl ReviewStore {
    #[must_use]
    pub fn new(store: DocumentStore) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// All stored reviews, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on storage failure or a corrupt document.
    pub async fn list(&self) -> Result<Vec<ReviewRecord>, StoreError> {
        let doc: ReviewsDocument = self.store.read(DOC, &ReviewsDocument::default()).await?;
        Ok(doc.reviews)
    }

    /// Validate `raw`, stamp it with a fresh id and timestamp, and store it
    /// at the front of the collection, evicting past [`MAX_REVIEWS`].
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for rejected input and `AppError::Store`
    /// on storage failure.
    pub async fn append(&self, raw: &Value) -> Result<ReviewRecord, AppError> {
        let input = validate_review(raw)?;

        let record = ReviewRecord {
            id: RecordId::generate(ID_LEN),
            name: input.name,
            rating: input.rating,
            comment: input.comment,
            created_at: Utc::now(),
        };

        let _guard = self.write_lock.lock().await;
        let mut doc: ReviewsDocument = self.store.read(DOC, &ReviewsDocument::default()).await?;
        doc.reviews.insert(0, record.clone());
        doc.reviews.truncate(MAX_REVIEWS);
        self.store
            .write(DOC, &doc, &ReviewsDocument::default())
            .await?;

        Ok(record)
    }
}
