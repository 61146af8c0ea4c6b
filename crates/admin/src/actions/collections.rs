//! Save a collection's position and publication state.

use merchdesk_core::CollectionId;
use tracing::instrument;

use super::{Outcome, report_failure};
use crate::db::{CollectionPatch, CollectionRepository};
use crate::state::AppState;

const SHOP_PATH: &str = "/admin/shop";

/// Apply `patch` to an existing collection.
#[instrument(skip(state), fields(collection_id = %id))]
pub async fn update_collection(state: &AppState, id: &CollectionId, patch: CollectionPatch) -> Outcome {
    match CollectionRepository::new(state.store()).update(id, patch).await {
        Ok(()) => {
            state.render_cache().revalidate_path(SHOP_PATH).await;
            Outcome::success("Collection updated")
        }
        Err(e) => {
            report_failure("update_collection", &e);
            Outcome::failure("Error updating collection")
        }
    }
}
