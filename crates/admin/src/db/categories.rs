//! Category repository.

use serde_json::{Map, Value};

use merchdesk_core::{CategoryId, Visibility};

use super::{CATEGORIES, DocumentStore, PAGE_SECTIONS, StoreError, decode, encode};
use crate::models::{CATEGORY_SECTION_ID, Category, CategorySection};

/// Repository for categories and the categories section setting.
pub struct CategoryRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> CategoryRepository<'a> {
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// All categories ordered by `index`, then id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store fails or a document is malformed.
    pub async fn list(&self) -> Result<Vec<Category>, StoreError> {
        let mut categories = self
            .store
            .list(CATEGORIES)
            .await?
            .into_iter()
            .map(|document| decode::<Category>(CATEGORIES, &document.id, document.data))
            .collect::<Result<Vec<_>, _>>()?;

        categories.sort_by(|a, b| a.index.cmp(&b.index).then_with(|| a.id.cmp(&b.id)));
        Ok(categories)
    }

    /// The categories section setting; hidden when never saved.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store fails or the document is malformed.
    pub async fn section(&self) -> Result<CategorySection, StoreError> {
        Ok(self
            .store
            .get(PAGE_SECTIONS, CATEGORY_SECTION_ID)
            .await?
            .map(|data| {
                let mut data = data;
                data.remove("id");
                serde_json::from_value::<CategorySection>(Value::Object(data))
            })
            .transpose()
            .map_err(|e| {
                StoreError::DataCorruption(format!(
                    "invalid {PAGE_SECTIONS}/{CATEGORY_SECTION_ID} document: {e}"
                ))
            })?
            .unwrap_or_default())
    }

    /// Save the categories section setting, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub async fn set_section(&self, section: CategorySection) -> Result<(), StoreError> {
        let mut data = self
            .store
            .get(PAGE_SECTIONS, CATEGORY_SECTION_ID)
            .await?
            .unwrap_or_default();
        data.extend(encode(&section)?);
        self.store
            .set(PAGE_SECTIONS, CATEGORY_SECTION_ID, data)
            .await
    }

    /// Set one category's visibility.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the category does not exist.
    pub async fn set_visibility(
        &self,
        id: &CategoryId,
        visibility: Visibility,
    ) -> Result<(), StoreError> {
        let mut fields = Map::new();
        fields.insert(
            "visibility".to_string(),
            Value::String(visibility.as_str().to_string()),
        );
        self.store.update(CATEGORIES, id.as_str(), fields).await
    }
}
