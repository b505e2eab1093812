//! Quotes collection manager.

use brickline_core::{QuoteRecord, QuotesDocument, RecordId, validate_quote};
use chrono::Utc;
use serde_json::Value;
use tokio::sync::Mutex;

use super::{DocumentStore, StoreError};
use crate::error::AppError;

const DOC: &str = "quotes";

/// Retention cap: the oldest entries past this are evicted on write.
pub const MAX_QUOTES: usize = 1000;

const ID_LEN: usize = 12;

/// Manager for the quote-request collection.
pub struct QuoteStore {
    store: DocumentStore,
    // Same discipline as reviews: appends serialize behind this lock.
    write_lock: Mutex<()>,
}

impl QuoteStore {
    #[must_use]
    pub fn new(store: DocumentStore) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// All stored quote requests, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on storage failure or a corrupt document.
    pub async fn list(&self) -> Result<Vec<QuoteRecord>, StoreError> {
        let doc: QuotesDocument = self.store.read(DOC, &QuotesDocument::default()).await?;
        Ok(doc.quotes)
    }

    /// Look up one quote request by id.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when no stored quote has `id`, and
    /// `AppError::Store` on storage failure.
    pub async fn get(&self, id: &str) -> Result<QuoteRecord, AppError> {
        let doc: QuotesDocument = self.store.read(DOC, &QuotesDocument::default()).await?;
        doc.quotes
            .into_iter()
            .find(|quote| quote.id.as_str() == id)
            .ok_or(AppError::NotFound("Quote"))
    }

    /// Validate `raw`, stamp it with a fresh id and timestamp, and store it
    /// at the front of the collection, evicting past [`MAX_QUOTES`].
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for rejected input and `AppError::Store`
    /// on storage failure.
    pub async fn append(&self, raw: &Value) -> Result<QuoteRecord, AppError> {
        let input = validate_quote(raw)?;

        let record = QuoteRecord {
            id: RecordId::generate(ID_LEN),
            topic: input.topic,
            name: input.name,
            phone: input.phone,
            requirement: input.requirement,
            created_at: Utc::now(),
        };

        let _guard = self.write_lock.lock().await;
        let mut doc: QuotesDocument = self.store.read(DOC, &QuotesDocument::default()).await?;
        doc.quotes.insert(0, record.clone());
        doc.quotes.truncate(MAX_QUOTES);
        self.store
            .write(DOC, &doc, &QuotesDocument::default())
            .await?;

        Ok(record)
    }
}
