//! In-process document store.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Document, DocumentStore, StoreError, StoredDocument};

/// Document store held in memory, keyed by collection then id.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Document>>>,
}

impl MemoryDocumentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|documents| documents.get(id))
            .cloned())
    }

    async fn set(&self, collection: &str, id: &str, data: Document) -> Result<(), StoreError> {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), data);
        Ok(())
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let document = collections
            .get_mut(collection)
            .and_then(|documents| documents.get_mut(id))
            .ok_or_else(|| StoreError::not_found(collection, id))?;

        document.extend(fields);
        Ok(())
    }

    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .map(|(id, data)| StoredDocument {
                        id: id.clone(),
                        data: data.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn doc(value: serde_json::Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryDocumentStore::new();
        store
            .set("products", "p1", doc(json!({ "name": "Tee" })))
            .await
            .unwrap();

        let fetched = store.get("products", "p1").await.unwrap().unwrap();
        assert_eq!(fetched["name"], "Tee");
        assert!(store.get("products", "p2").await.unwrap().is_none());
        assert!(store.get("other", "p1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_merges_top_level_fields() {
        let store = MemoryDocumentStore::new();
        store
            .set("page_hero", "main", doc(json!({ "title": "Old", "image": "a" })))
            .await
            .unwrap();
        store
            .update("page_hero", "main", doc(json!({ "title": "New" })))
            .await
            .unwrap();

        let fetched = store.get("page_hero", "main").await.unwrap().unwrap();
        assert_eq!(fetched["title"], "New");
        assert_eq!(fetched["image"], "a");
    }

    #[tokio::test]
    async fn test_update_missing_document_fails() {
        let store = MemoryDocumentStore::new();
        let err = store
            .update("page_hero", "main", doc(json!({ "title": "New" })))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let store = MemoryDocumentStore::new();
        for id in ["c", "a", "b"] {
            store
                .set("categories", id, doc(json!({ "index": 1 })))
                .await
                .unwrap();
        }

        let ids: Vec<String> = store
            .list("categories")
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(store.list("empty").await.unwrap().is_empty());
    }
}
