//! Page hero repository.

use merchdesk_core::PageHeroId;

use super::{DocumentStore, PAGE_HERO, StoreError, decode, encode};
use crate::models::PageHero;

/// Repository for the storefront page hero.
pub struct PageHeroRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> PageHeroRepository<'a> {
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// The page hero in use: the first document of the collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store fails or the document is malformed.
    pub async fn current(&self) -> Result<Option<PageHero>, StoreError> {
        self.store
            .list(PAGE_HERO)
            .await?
            .into_iter()
            .next()
            .map(|document| decode(PAGE_HERO, &document.id, document.data))
            .transpose()
    }

    /// Get a page hero by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store fails or the document is malformed.
    pub async fn get(&self, id: &PageHeroId) -> Result<Option<PageHero>, StoreError> {
        self.store
            .get(PAGE_HERO, id.as_str())
            .await?
            .map(|data| decode(PAGE_HERO, id.as_str(), data))
            .transpose()
    }

    /// Overwrite every field of an existing page hero except its id.
    ///
    /// The document is not read first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the document does not exist.
    pub async fn update(&self, hero: &PageHero) -> Result<(), StoreError> {
        let fields = encode(hero)?;
        self.store.update(PAGE_HERO, hero.id.as_str(), fields).await
    }
}
