//! Save the page hero.

use tracing::instrument;

use super::{Outcome, report_failure};
use crate::db::PageHeroRepository;
use crate::models::PageHero;
use crate::state::AppState;

const SHOP_PATH: &str = "/admin/shop";

/// Overwrite the stored page hero with `hero`.
///
/// The stored document must already exist; it is not read first.
#[instrument(skip(state, hero), fields(page_hero_id = %hero.id))]
pub async fn update_page_hero(state: &AppState, hero: &PageHero) -> Outcome {
    match PageHeroRepository::new(state.store()).update(hero).await {
        Ok(()) => {
            state.render_cache().revalidate_path(SHOP_PATH).await;
            Outcome::success("Page hero updated")
        }
        Err(e) => {
            report_failure("update_page_hero", &e);
            Outcome::failure("Error updating page hero")
        }
    }
}
