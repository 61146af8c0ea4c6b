//! JSON API over the same actions as the dashboard forms.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use merchdesk_core::{
    ActionResponse, CampaignStatus, CollectionId, ProductId, StatusCode as ActionCode, paginate,
};

use crate::actions::{
    CategoriesUpdate, Outcome, update_categories, update_collection, update_page_hero,
    update_product,
};
use crate::components::PageHeroForm;
use crate::db::{
    CategoryRepository, CollectionPatch, CollectionRepository, PageHeroRepository,
    ProductRepository,
};
use crate::error::AppError;
use crate::models::{Category, CategorySection, Collection, PageHero, Product, ProductUpdate};
use crate::state::AppState;

/// Routes mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/page-hero", get(get_page_hero).put(put_page_hero))
        .route("/products/{id}", get(get_product).patch(patch_product))
        .route("/collections", get(list_collections))
        .route("/collections/{id}", patch(patch_collection))
        .route("/categories", get(get_categories).put(put_categories))
}

type ActionReply = (StatusCode, Json<ActionResponse>);

fn reply(outcome: Outcome) -> ActionReply {
    let response = outcome.to_response();
    let status =
        StatusCode::from_u16(response.status.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response))
}

fn rejected(message: &str) -> ActionReply {
    (
        StatusCode::BAD_REQUEST,
        Json(ActionResponse::new(ActionCode::BAD_REQUEST.code, message)),
    )
}

/// `GET /api/page-hero`
#[instrument(skip(state))]
pub async fn get_page_hero(State(state): State<AppState>) -> Result<Json<PageHero>, AppError> {
    PageHeroRepository::new(state.store())
        .current()
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("page hero".to_string()))
}

/// `PUT /api/page-hero` - validated like the dashboard panel.
#[instrument(skip(state, hero), fields(page_hero_id = %hero.id))]
pub async fn put_page_hero(State(state): State<AppState>, Json(hero): Json<PageHero>) -> ActionReply {
    if let Err(message) = PageHeroForm::from_hero(&hero).validate() {
        return rejected(message);
    }
    reply(update_page_hero(&state, &hero).await)
}

/// `GET /api/products/{id}`
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    ProductRepository::new(state.store())
        .get(&ProductId::new(id.as_str()))
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

/// `PATCH /api/products/{id}`
#[instrument(skip(state, changes))]
pub async fn patch_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(changes): Json<ProductUpdate>,
) -> ActionReply {
    reply(update_product(&state, &ProductId::new(id), &changes).await)
}

#[derive(Debug, Deserialize)]
pub struct CollectionsQuery {
    pub page: Option<usize>,
}

/// A collection with its derived campaign status.
#[derive(Debug, Serialize)]
pub struct CollectionSummary {
    #[serde(flatten)]
    pub collection: Collection,
    pub campaign_status: CampaignStatus,
}

#[derive(Debug, Serialize)]
pub struct CollectionsPage {
    pub page: usize,
    pub total_pages: usize,
    pub items: Vec<CollectionSummary>,
}

/// `GET /api/collections?page=` - one page of the collections table.
#[instrument(skip(state))]
pub async fn list_collections(
    State(state): State<AppState>,
    Query(query): Query<CollectionsQuery>,
) -> Result<Json<CollectionsPage>, AppError> {
    let collections = CollectionRepository::new(state.store()).list().await?;
    let page_number = query.page.unwrap_or(1);
    let page = paginate(&collections, page_number, state.config().collections_per_page);
    let now = state.now();

    Ok(Json(CollectionsPage {
        page: page_number,
        total_pages: page.total_pages,
        items: page
            .items
            .iter()
            .map(|collection| CollectionSummary {
                campaign_status: collection.campaign_status(now),
                collection: collection.clone(),
            })
            .collect(),
    }))
}

/// `PATCH /api/collections/{id}`
#[instrument(skip(state))]
pub async fn patch_collection(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<CollectionPatch>,
) -> ActionReply {
    reply(update_collection(&state, &CollectionId::new(id), patch).await)
}

#[derive(Debug, Serialize)]
pub struct CategoriesBody {
    pub section: CategorySection,
    pub categories: Vec<Category>,
}

/// `GET /api/categories`
#[instrument(skip(state))]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesBody>, AppError> {
    let repo = CategoryRepository::new(state.store());
    Ok(Json(CategoriesBody {
        section: repo.section().await?,
        categories: repo.list().await?,
    }))
}

/// `PUT /api/categories`
#[instrument(skip(state, update))]
pub async fn put_categories(
    State(state): State<AppState>,
    Json(update): Json<CategoriesUpdate>,
) -> ActionReply {
    reply(update_categories(&state, &update).await)
}
