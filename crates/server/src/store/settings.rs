//! Settings collection manager.

use brickline_core::{SettingsDocument, ValidationError, sanitize_settings};
use serde_json::Value;
use tokio::sync::Mutex;

use super::{DocumentStore, StoreError};
use crate::error::AppError;

const DOC: &str = "settings";

/// Manager for the single settings document.
///
/// There is exactly one settings document per deployment; `replace` swaps it
/// out whole, never merging old and new.
pub struct SettingsStore {
    store: DocumentStore,
    // Serializes replace() cycles so two admin saves cannot interleave.
    write_lock: Mutex<()>,
}

impl SettingsStore {
    #[must_use]
    pub fn new(store: DocumentStore) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Current settings, or the default document if never set.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on storage failure or a corrupt document.
    pub async fn get(&self) -> Result<SettingsDocument, StoreError> {
        self.store.read(DOC, &SettingsDocument::default()).await
    }

    /// Sanitize `raw` and persist it as the new settings document.
    ///
    /// Returns the document as stored, which is what the caller should echo
    /// back - not the raw payload.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when `faqs` is present but not an array
    /// or `shopInfo` is present but not an object, and `AppError::Store` on
    /// storage failure.
    pub async fn replace(&self, raw: &Value) -> Result<SettingsDocument, AppError> {
        let faqs_ok = raw.get("faqs").is_none_or(Value::is_array);
        let shop_ok = raw.get("shopInfo").is_none_or(Value::is_object);
        if !faqs_ok || !shop_ok {
            return Err(ValidationError::InvalidSettingsPayload.into());
        }

        let doc = sanitize_settings(raw);

        let _guard = self.write_lock.lock().await;
        self.store
            .write(DOC, &doc, &SettingsDocument::default())
            .await?;
        Ok(doc)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn manager() -> (TempDir, SettingsStore) {
        let dir = TempDir::new().unwrap();
        let manager = SettingsStore::new(DocumentStore::new(dir.path()));
        (dir, manager)
    }

    #[tokio::test]
    async fn test_get_defaults_when_never_set() {
        let (_dir, settings) = manager();
        let doc = settings.get().await.unwrap();
        assert_eq!(doc, SettingsDocument::default());
    }

    #[tokio::test]
    async fn test_replace_stores_sanitized_form() {
        let (_dir, settings) = manager();

        let stored = settings
            .replace(&json!({
                "faqs": [{"q": "  Open when? ", "a": "9-5"}],
                "shopInfo": {"name": " Shop "}
            }))
            .await
            .unwrap();

        assert_eq!(stored.faqs[0].question, "Open when?");
        assert_eq!(stored.shop_info.name, "Shop");
        assert_eq!(stored.shop_info.hours, "");

        // And get() returns the same document.
        assert_eq!(settings.get().await.unwrap(), stored);
    }

    #[tokio::test]
    async fn test_replace_is_whole_document() {
        let (_dir, settings) = manager();

        settings
            .replace(&json!({"shopInfo": {"name": "First", "phone": "123"}}))
            .await
            .unwrap();
        settings
            .replace(&json!({"shopInfo": {"name": "Second"}}))
            .await
            .unwrap();

        let doc = settings.get().await.unwrap();
        assert_eq!(doc.shop_info.name, "Second");
        // No partial merge: the old phone is gone.
        assert_eq!(doc.shop_info.phone, "");
    }

    #[tokio::test]
    async fn test_replace_rejects_bad_shapes() {
        let (_dir, settings) = manager();

        for raw in [
            json!({"faqs": "not a list"}),
            json!({"faqs": 7}),
            json!({"shopInfo": []}),
            json!({"shopInfo": null}),
        ] {
            let err = settings.replace(&raw).await.unwrap_err();
            assert_eq!(err.to_string(), "Invalid settings payload", "raw: {raw}");
        }

        // Absent fields are fine and default.
        assert!(settings.replace(&json!({})).await.is_ok());
    }
}
