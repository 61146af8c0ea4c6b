//! Storefront dashboard: page hero, categories and the collections table.

use std::collections::HashMap;
use std::str::FromStr;

use askama::Template;
use axum::{
    Form,
    extract::{Path, Query, RawQuery, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use tracing::{debug, instrument};

use merchdesk_core::{CollectionId, CollectionVisibility, PageHeroId, Visibility};

use super::{redirect_with_error, redirect_with_outcome, render_page};
use crate::actions::{update_categories, update_collection, update_page_hero};
use crate::components::{Alert, CategoriesForm, Chip, CollectionTable, PageHeroForm};
use crate::db::{CategoryRepository, CollectionPatch, CollectionRepository, PageHeroRepository};
use crate::error::AppError;
use crate::models::PageHero;
use crate::revalidation::CacheKey;
use crate::state::AppState;

pub const SHOP_PATH: &str = "/admin/shop";

/// Query parameters of the dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct ShopQuery {
    pub page: Option<String>,
    pub page_jump: Option<String>,
    pub alert: Option<String>,
    pub status: Option<String>,
}

/// Page hero panel.
#[derive(Debug, Clone)]
pub struct HeroPanel {
    pub id: String,
    pub form: PageHeroForm,
    pub visible: bool,
    pub chip: Chip,
    pub preview: Option<String>,
}

impl HeroPanel {
    fn new(hero: &PageHero, allowed_hosts: &[String]) -> Self {
        let form = PageHeroForm::from_hero(hero);
        let preview = form.image_preview(allowed_hosts).map(str::to_string);

        Self {
            id: hero.id.to_string(),
            visible: form.visibility.is_visible(),
            chip: Chip::new(form.visibility.as_str()),
            preview,
            form,
        }
    }
}

/// Dashboard template.
#[derive(Template)]
#[template(path = "shop/index.html")]
pub struct ShopTemplate {
    pub current_path: String,
    pub alert: Option<Alert>,
    pub hero: Option<HeroPanel>,
    pub section_visible: bool,
    pub categories: CategoriesForm,
    pub table: CollectionTable,
}

/// `GET /` - send visitors to the dashboard.
pub async fn redirect_to_shop() -> Redirect {
    Redirect::to(SHOP_PATH)
}

/// `GET /admin/shop` - dashboard page.
#[instrument(skip(state, raw_query))]
pub async fn index(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
    Query(query): Query<ShopQuery>,
) -> Result<Html<String>, AppError> {
    let now = state.now();
    let cache_key = query.alert.is_none().then(|| {
        CacheKey::new(SHOP_PATH, raw_query.as_deref()).with_day(now.date_naive())
    });

    if let Some(key) = &cache_key
        && let Some(html) = state.render_cache().get(key).await
    {
        debug!("Cache hit for shop page");
        return Ok(Html(html.to_string()));
    }

    let config = state.config();
    let hero = PageHeroRepository::new(state.store()).current().await?;
    let category_repo = CategoryRepository::new(state.store());
    let section = category_repo.section().await?;
    let categories = category_repo.list().await?;
    let collections = CollectionRepository::new(state.store()).list().await?;

    let page = query
        .page
        .as_deref()
        .and_then(|page| page.trim().parse::<usize>().ok())
        .unwrap_or(1);
    let table = CollectionTable::new(
        &collections,
        page,
        query.page_jump.as_deref(),
        config.collections_per_page,
        now,
    );

    let dismiss_href = format!("{SHOP_PATH}?page={}", table.current_page);
    let template = ShopTemplate {
        current_path: SHOP_PATH.to_string(),
        alert: Alert::from_query(query.alert.as_deref(), query.status.as_deref(), &dismiss_href),
        hero: hero
            .as_ref()
            .map(|hero| HeroPanel::new(hero, &config.image_hosts)),
        section_visible: section.visibility.is_visible(),
        categories: CategoriesForm::new(section, &categories),
        table,
    };

    Ok(render_page(&state, cache_key, &template).await)
}

/// Page hero form submission.
#[derive(Debug, Deserialize)]
pub struct PageHeroSubmission {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub destination_url: String,
    /// Checkbox; absent when unchecked.
    pub visible: Option<String>,
}

/// `POST /admin/shop/page-hero` - validate and save the page hero.
#[instrument(skip(state, submission), fields(page_hero_id = %submission.id))]
pub async fn save_page_hero(
    State(state): State<AppState>,
    Form(submission): Form<PageHeroSubmission>,
) -> Redirect {
    let form = PageHeroForm {
        title: submission.title,
        image: submission.image,
        destination_url: submission.destination_url,
        visibility: Visibility::from_flag(submission.visible.is_some()),
    };

    if let Err(message) = form.validate() {
        return redirect_with_error(SHOP_PATH, message);
    }

    let hero = form.into_hero(PageHeroId::new(submission.id));
    redirect_with_outcome(SHOP_PATH, update_page_hero(&state, &hero).await)
}

/// `POST /admin/shop/categories` - save the categories panel.
#[instrument(skip(state, fields))]
pub async fn save_categories(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Redirect, AppError> {
    let repo = CategoryRepository::new(state.store());
    let mut form = CategoriesForm::new(repo.section().await?, &repo.list().await?);
    form.apply_submission(&fields);

    let outcome = update_categories(&state, &form.to_update()).await;
    Ok(redirect_with_outcome(SHOP_PATH, outcome))
}

/// Collection row form submission.
#[derive(Debug, Deserialize)]
pub struct CollectionSubmission {
    pub index: Option<String>,
    pub visibility: Option<String>,
    /// Table page to return to.
    pub page: Option<usize>,
}

/// `POST /admin/shop/collections/{id}` - change a collection's index or
/// publication state.
#[instrument(skip(state, submission))]
pub async fn save_collection(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(submission): Form<CollectionSubmission>,
) -> Redirect {
    let return_path = format!("{SHOP_PATH}?page={}", submission.page.unwrap_or(1).max(1));

    let index = match non_blank(submission.index.as_deref()).map(str::parse::<u32>) {
        Some(Ok(index)) => Some(index),
        Some(Err(_)) => return redirect_with_error(&return_path, "Please provide a valid index"),
        None => None,
    };
    let visibility = match non_blank(submission.visibility.as_deref())
        .map(CollectionVisibility::from_str)
    {
        Some(Ok(visibility)) => Some(visibility),
        Some(Err(_)) => {
            return redirect_with_error(&return_path, "Please provide a valid visibility");
        }
        None => None,
    };

    let outcome = update_collection(
        &state,
        &CollectionId::new(id),
        CollectionPatch { index, visibility },
    )
    .await;
    redirect_with_outcome(&return_path, outcome)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
