//! Save a product.

use merchdesk_core::ProductId;
use tracing::instrument;

use super::{Outcome, report_failure};
use crate::db::ProductRepository;
use crate::models::ProductUpdate;
use crate::state::AppState;

/// Route pattern of the product editor; every rendered product page is
/// dropped after a save.
const PRODUCT_ROUTE: &str = "/admin/products/[id]";

/// Merge `changes` over the stored product and stamp `last_updated`.
#[instrument(skip(state, changes), fields(product_id = %id))]
pub async fn update_product(state: &AppState, id: &ProductId, changes: &ProductUpdate) -> Outcome {
    match ProductRepository::new(state.store())
        .merge(id, changes, state.now())
        .await
    {
        Ok(()) => {
            state.render_cache().revalidate_route(PRODUCT_ROUTE).await;
            Outcome::success("Product updated")
        }
        Err(e) => {
            report_failure("update_product", &e);
            Outcome::failure("Failed to update product")
        }
    }
}
