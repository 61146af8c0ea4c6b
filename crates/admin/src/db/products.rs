//! Product repository.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use merchdesk_core::ProductId;

use super::{DocumentStore, PRODUCTS, StoreError, decode, encode};
use crate::models::{Product, ProductUpdate};

/// Repository for product documents.
pub struct ProductRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> ProductRepository<'a> {
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Get a product by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store fails or the document is malformed.
    pub async fn get(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        self.store
            .get(PRODUCTS, id.as_str())
            .await?
            .map(|data| decode(PRODUCTS, id.as_str(), data))
            .transpose()
    }

    /// Merge `changes` over the stored product and write the whole document.
    ///
    /// Stored fields not named in `changes` are kept. A missing product is
    /// created from `changes` alone. `last_updated` is always set to `now`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read or the write fails. The stored
    /// document is never type-checked, so loosely typed fields cannot fail
    /// a write.
    pub async fn merge(
        &self,
        id: &ProductId,
        changes: &ProductUpdate,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let mut document = self
            .store
            .get(PRODUCTS, id.as_str())
            .await?
            .unwrap_or_default();

        document.extend(encode(changes)?);
        document.insert(
            "last_updated".to_string(),
            Value::String(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );

        self.store.set(PRODUCTS, id.as_str(), document).await
    }
}
