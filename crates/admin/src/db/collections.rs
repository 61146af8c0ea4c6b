//! Collection repository.

use serde::{Deserialize, Serialize};

use merchdesk_core::{CollectionId, CollectionVisibility};

use super::{COLLECTIONS, DocumentStore, StoreError, decode, encode};
use crate::models::Collection;

/// Fields of a collection the admin table can change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<CollectionVisibility>,
}

/// Repository for collection documents.
pub struct CollectionRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> CollectionRepository<'a> {
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// All collections in display order (`index`, then id).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store fails or a document is malformed.
    pub async fn list(&self) -> Result<Vec<Collection>, StoreError> {
        let mut collections = self
            .store
            .list(COLLECTIONS)
            .await?
            .into_iter()
            .map(|document| decode::<Collection>(COLLECTIONS, &document.id, document.data))
            .collect::<Result<Vec<_>, _>>()?;

        collections.sort_by(|a, b| a.index.cmp(&b.index).then_with(|| a.id.cmp(&b.id)));
        Ok(collections)
    }

    /// Get a collection by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store fails or the document is malformed.
    pub async fn get(&self, id: &CollectionId) -> Result<Option<Collection>, StoreError> {
        self.store
            .get(COLLECTIONS, id.as_str())
            .await?
            .map(|data| decode(COLLECTIONS, id.as_str(), data))
            .transpose()
    }

    /// Apply a partial update to an existing collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the collection does not exist.
    pub async fn update(&self, id: &CollectionId, patch: CollectionPatch) -> Result<(), StoreError> {
        self.store
            .update(COLLECTIONS, id.as_str(), encode(&patch)?)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::db::MemoryDocumentStore;

    async fn insert(store: &MemoryDocumentStore, id: &str, index: u32) {
        let data = json!({
            "index": index,
            "title": format!("Collection {id}"),
            "slug": id,
            "campaign_duration": { "start_date": "2024-01-01", "end_date": "2024-01-31" },
            "collection_type": "PROMOTIONAL_BANNER",
            "visibility": "DRAFT",
        });
        store
            .set(COLLECTIONS, id, data.as_object().cloned().unwrap())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_orders_by_index() {
        let store = MemoryDocumentStore::new();
        insert(&store, "a", 3).await;
        insert(&store, "b", 1).await;
        insert(&store, "c", 2).await;

        let ids: Vec<String> = CollectionRepository::new(&store)
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id.into_inner())
            .collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[tokio::test]
    async fn test_update_writes_only_patched_fields() {
        let store = MemoryDocumentStore::new();
        insert(&store, "a", 3).await;

        let repo = CollectionRepository::new(&store);
        repo.update(
            &CollectionId::new("a"),
            CollectionPatch {
                visibility: Some(CollectionVisibility::Published),
                ..CollectionPatch::default()
            },
        )
        .await
        .unwrap();

        let collection = repo.get(&CollectionId::new("a")).await.unwrap().unwrap();
        assert_eq!(collection.visibility, CollectionVisibility::Published);
        assert_eq!(collection.index, 3);
    }
}
