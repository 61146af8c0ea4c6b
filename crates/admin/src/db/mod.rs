//! Document store for merchandising content.
//!
//! # Collections
//!
//! - `page_hero` - Storefront banner (one document)
//! - `products` - Product records (loosely typed, unknown fields preserved)
//! - `collections` - Promotional collections with campaign windows
//! - `categories` - Category visibility
//! - `page_sections` - Per-section storefront settings (e.g. `categories`)
//!
//! Every document is a JSON object addressed by `(collection, id)`. The `id`
//! is never stored inside the document body.
//!
//! # Backends
//!
//! - [`PgDocumentStore`] - `merch.documents` JSONB table
//! - [`MemoryDocumentStore`] - process-local, used by tests and `ADMIN_DOCUMENT_STORE=memory`
//!
//! # Migrations
//!
//! Migrations are stored in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p merchdesk-cli -- migrate
//! ```

pub mod categories;
pub mod collections;
pub mod memory;
pub mod page_hero;
pub mod postgres;
pub mod products;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use categories::CategoryRepository;
pub use collections::{CollectionPatch, CollectionRepository};
pub use memory::MemoryDocumentStore;
pub use page_hero::PageHeroRepository;
pub use postgres::PgDocumentStore;
pub use products::ProductRepository;

/// Collection holding the page hero document.
pub const PAGE_HERO: &str = "page_hero";
/// Collection holding product documents.
pub const PRODUCTS: &str = "products";
/// Collection holding promotional collection documents.
pub const COLLECTIONS: &str = "collections";
/// Collection holding category documents.
pub const CATEGORIES: &str = "categories";
/// Collection holding storefront section settings.
pub const PAGE_SECTIONS: &str = "page_sections";

/// A document body.
pub type Document = Map<String, Value>;

/// A document together with its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub data: Document,
}

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the store does not match the expected shape.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// A value could not be converted to a document.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Requested document was not found.
    #[error("document {collection}/{id} not found")]
    NotFound { collection: String, id: String },
}

impl StoreError {
    pub(crate) fn not_found(collection: &str, id: &str) -> Self {
        Self::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }
}

/// A keyed JSON document store.
///
/// There is no conflict detection: every write replaces or patches whatever
/// is stored at the moment it lands.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch one document.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Create or replace a whole document.
    async fn set(&self, collection: &str, id: &str, data: Document) -> Result<(), StoreError>;

    /// Merge top-level `fields` into an existing document.
    ///
    /// Fails with [`StoreError::NotFound`] if the document does not exist.
    async fn update(&self, collection: &str, id: &str, fields: Document)
    -> Result<(), StoreError>;

    /// All documents of a collection, ordered by id.
    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Decode a stored document into a model, injecting its `id`.
pub(crate) fn decode<T: DeserializeOwned>(
    collection: &str,
    id: &str,
    mut data: Document,
) -> Result<T, StoreError> {
    data.insert("id".to_string(), Value::String(id.to_string()));
    serde_json::from_value(Value::Object(data)).map_err(|e| {
        StoreError::DataCorruption(format!("invalid {collection}/{id} document: {e}"))
    })
}

/// Encode a model as a document body, dropping its `id`.
pub(crate) fn encode<T: Serialize>(value: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(value)? {
        Value::Object(mut data) => {
            data.remove("id");
            Ok(data)
        }
        other => Err(StoreError::DataCorruption(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Thing {
        id: String,
        name: String,
    }

    #[test]
    fn test_decode_injects_id() {
        let data = json!({ "name": "widget" }).as_object().cloned().unwrap();
        let thing: Thing = decode("things", "t-1", data).unwrap();
        assert_eq!(
            thing,
            Thing {
                id: "t-1".to_string(),
                name: "widget".to_string()
            }
        );
    }

    #[test]
    fn test_decode_reports_corruption() {
        let data = json!({ "name": 7 }).as_object().cloned().unwrap();
        let err = decode::<Thing>("things", "t-1", data).unwrap_err();
        assert!(matches!(err, StoreError::DataCorruption(_)));
        assert!(err.to_string().contains("things/t-1"));
    }

    #[test]
    fn test_encode_drops_id() {
        let thing = Thing {
            id: "t-1".to_string(),
            name: "widget".to_string(),
        };
        let data = encode(&thing).unwrap();
        assert!(!data.contains_key("id"));
        assert_eq!(data["name"], "widget");
    }

    #[test]
    fn test_not_found_display() {
        let err = StoreError::not_found("page_hero", "main");
        assert_eq!(err.to_string(), "document page_hero/main not found");
    }
}
