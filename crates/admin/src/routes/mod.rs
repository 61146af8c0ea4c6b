//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Liveness check
//! GET  /health/ready                    - Store reachability
//!
//! # Storefront dashboard
//! GET  /                                - Redirect to /admin/shop
//! GET  /admin/shop                      - Page hero, categories, collections
//! POST /admin/shop/page-hero            - Save page hero
//! POST /admin/shop/categories           - Save category visibility
//! POST /admin/shop/collections/{id}     - Save collection index/visibility
//!
//! # Products
//! GET  /admin/products/{id}             - Product editor
//! POST /admin/products/{id}             - Save product
//!
//! # JSON API
//! GET|PUT   /api/page-hero
//! GET|PATCH /api/products/{id}
//! GET       /api/collections?page=
//! PATCH     /api/collections/{id}
//! GET|PUT   /api/categories
//! ```

pub mod api;
pub mod health;
pub mod products;
pub mod shop;

use askama::Template;
use axum::{
    Router,
    response::{Html, Redirect},
    routing::{get, post},
};

use crate::actions::Outcome;
use crate::components::{AlertTone, redirect_with_alert};
use crate::revalidation::CacheKey;
use crate::state::AppState;

/// All admin routes, without middleware.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .route("/", get(shop::redirect_to_shop))
        .route("/admin/shop", get(shop::index))
        .route("/admin/shop/page-hero", post(shop::save_page_hero))
        .route("/admin/shop/categories", post(shop::save_categories))
        .route("/admin/shop/collections/{id}", post(shop::save_collection))
        .route(
            "/admin/products/{id}",
            get(products::show).post(products::update),
        )
        .nest("/api", api::routes())
}

/// Render a page, caching the markup under `cache_key` when given.
async fn render_page(
    state: &AppState,
    cache_key: Option<CacheKey>,
    template: &impl Template,
) -> Html<String> {
    match template.render() {
        Ok(html) => {
            if let Some(key) = cache_key {
                state.render_cache().insert(key, html.as_str()).await;
            }
            Html(html)
        }
        Err(e) => {
            tracing::error!("Template render error: {}", e);
            Html("Internal Server Error".to_string())
        }
    }
}

/// Redirect back to `path` with the outcome of an action as the alert.
fn redirect_with_outcome(path: &str, outcome: Outcome) -> Redirect {
    Redirect::to(&redirect_with_alert(
        path,
        outcome.message(),
        AlertTone::from(outcome),
    ))
}

/// Redirect back to `path` with a validation message.
fn redirect_with_error(path: &str, message: &str) -> Redirect {
    Redirect::to(&redirect_with_alert(path, message, AlertTone::Failed))
}
