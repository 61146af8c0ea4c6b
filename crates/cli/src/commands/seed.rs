//! Seed the document store from a YAML file.
//!
//! The file maps collection names to lists of documents; every document
//! needs a string `id`:
//!
//! ```yaml
//! collections:
//!   - id: spring
//!     title: Spring Drop
//!     campaign_duration: { start_date: "2024-03-01", end_date: "2024-03-31" }
//!     collection_type: FEATURED_COLLECTION
//! categories:
//!   - { id: tops, index: 1, visibility: VISIBLE }
//! ```
//!
//! Existing documents with the same id are replaced.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;
use tracing::info;

use merchdesk_admin::db::{
    CATEGORIES, COLLECTIONS, Document, DocumentStore, PAGE_HERO, PAGE_SECTIONS, PRODUCTS,
    PgDocumentStore,
};

const KNOWN_COLLECTIONS: [&str; 5] = [PAGE_HERO, PRODUCTS, COLLECTIONS, CATEGORIES, PAGE_SECTIONS];

/// Errors from reading a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("{collection}[{position}] is not a mapping")]
    NotAMapping { collection: String, position: usize },

    #[error("{collection}[{position}] has no string id")]
    MissingId { collection: String, position: usize },
}

/// One document to write.
#[derive(Debug)]
pub struct SeedDocument {
    pub collection: String,
    pub id: String,
    pub data: Document,
}

/// Parse seed YAML into documents, in file order per collection.
///
/// # Errors
///
/// Returns `SeedError` if the YAML is malformed, names an unknown
/// collection, or holds a document without a string `id`.
pub fn parse(content: &str) -> Result<Vec<SeedDocument>, SeedError> {
    let collections: BTreeMap<String, Vec<Value>> = serde_yaml::from_str(content)?;
    let mut documents = Vec::new();

    for (collection, entries) in collections {
        if !KNOWN_COLLECTIONS.contains(&collection.as_str()) {
            return Err(SeedError::UnknownCollection(collection));
        }

        for (position, entry) in entries.into_iter().enumerate() {
            let Value::Object(mut data) = entry else {
                return Err(SeedError::NotAMapping {
                    collection,
                    position,
                });
            };
            let Some(Value::String(id)) = data.remove("id") else {
                return Err(SeedError::MissingId {
                    collection,
                    position,
                });
            };
            documents.push(SeedDocument {
                collection: collection.clone(),
                id,
                data,
            });
        }
    }

    Ok(documents)
}

/// Write every document in `documents` to `store`.
///
/// # Errors
///
/// Returns the first store error.
pub async fn write_all(
    store: &dyn DocumentStore,
    documents: Vec<SeedDocument>,
) -> Result<usize, merchdesk_admin::db::StoreError> {
    let count = documents.len();
    for document in documents {
        store
            .set(&document.collection, &document.id, document.data)
            .await?;
    }
    Ok(count)
}

/// Seed the admin database from `file_path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or a write fails.
pub async fn run(file_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(format!("File not found: {file_path}").into());
    }

    info!(path = %file_path, "Loading seed documents");
    let content = tokio::fs::read_to_string(path).await?;
    let documents = parse(&content)?;
    info!(documents = documents.len(), "Parsed seed file");

    let store = PgDocumentStore::new(super::connect().await?);
    let written = write_all(&store, documents).await?;

    info!("Seeding complete! {written} documents written");
    Ok(())
}
