//! Save category visibility.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use merchdesk_core::{CategoryId, Visibility};

use super::{Outcome, report_failure};
use crate::db::{CategoryRepository, StoreError};
use crate::models::CategorySection;
use crate::state::AppState;

const SHOP_PATH: &str = "/admin/shop";

/// Visibility of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryVisibility {
    pub id: CategoryId,
    pub visibility: Visibility,
}

/// The categories panel as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesUpdate {
    pub section_visibility: Visibility,
    #[serde(default)]
    pub categories: Vec<CategoryVisibility>,
}

/// Persist the section toggle and each category's visibility.
///
/// Writes are independent; a failure part-way leaves earlier writes in place.
#[instrument(skip(state, update), fields(categories = update.categories.len()))]
pub async fn update_categories(state: &AppState, update: &CategoriesUpdate) -> Outcome {
    match write_categories(state, update).await {
        Ok(()) => {
            state.render_cache().revalidate_path(SHOP_PATH).await;
            Outcome::success("Categories updated")
        }
        Err(e) => {
            report_failure("update_categories", &e);
            Outcome::failure("Error updating categories")
        }
    }
}

async fn write_categories(state: &AppState, update: &CategoriesUpdate) -> Result<(), StoreError> {
    let repo = CategoryRepository::new(state.store());
    repo.set_section(CategorySection {
        visibility: update.section_visibility,
    })
    .await?;

    for category in &update.categories {
        repo.set_visibility(&category.id, category.visibility)
            .await?;
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::actions::test_support::{seed, state};
    use crate::db::{CATEGORIES, DocumentStore};

    #[tokio::test]
    async fn test_saves_section_and_categories() {
        let (state, store) = state();
        seed(&store, CATEGORIES, "tops", json!({ "index": 1, "visibility": "HIDDEN" })).await;
        seed(&store, CATEGORIES, "shoes", json!({ "index": 2, "visibility": "VISIBLE" })).await;

        let update = CategoriesUpdate {
            section_visibility: Visibility::Visible,
            categories: vec![
                CategoryVisibility {
                    id: CategoryId::new("tops"),
                    visibility: Visibility::Visible,
                },
                CategoryVisibility {
                    id: CategoryId::new("shoes"),
                    visibility: Visibility::Hidden,
                },
            ],
        };
        let outcome = update_categories(&state, &update).await;

        assert_eq!(outcome.message(), "Categories updated");
        let repo = CategoryRepository::new(state.store());
        assert_eq!(repo.section().await.unwrap().visibility, Visibility::Visible);
        let categories = repo.list().await.unwrap();
        assert_eq!(categories[0].visibility, Visibility::Visible);
        assert_eq!(categories[1].visibility, Visibility::Hidden);
        assert_eq!(store.get(CATEGORIES, "tops").await.unwrap().unwrap()["index"], 1);
    }

    #[tokio::test]
    async fn test_unknown_category_fails() {
        let (state, _store) = state();
        let update = CategoriesUpdate {
            section_visibility: Visibility::Hidden,
            categories: vec![CategoryVisibility {
                id: CategoryId::new("ghost"),
                visibility: Visibility::Visible,
            }],
        };
        let outcome = update_categories(&state, &update).await;
        assert_eq!(outcome.message(), "Error updating categories");
    }
}
