//! Product editor.

use askama::Template;
use axum::{
    Form,
    extract::{Path, Query, RawQuery, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use tracing::{debug, instrument};

use merchdesk_core::ProductId;
use merchdesk_core::format::{format_date, is_valid_remote_image};

use super::{redirect_with_outcome, render_page};
use crate::actions::update_product;
use crate::components::{Alert, Chip};
use crate::db::ProductRepository;
use crate::error::AppError;
use crate::models::{Product, ProductUpdate};
use crate::revalidation::CacheKey;
use crate::state::AppState;

/// Query parameters of the product editor.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub alert: Option<String>,
    pub status: Option<String>,
}

/// Product view for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub slug: String,
    pub description: String,
    pub poster: String,
    pub poster_preview: Option<String>,
    /// One image URL per line.
    pub images: String,
    pub status: String,
    pub status_chip: Option<Chip>,
    pub visibility: String,
    pub visibility_chip: Option<Chip>,
    pub last_updated: Option<String>,
}

impl ProductView {
    fn new(product: &Product, allowed_hosts: &[String]) -> Self {
        let poster = product.poster.clone().unwrap_or_default();
        let status = product.status.clone().unwrap_or_default();
        let visibility = product.visibility.clone().unwrap_or_default();

        Self {
            id: product.id.to_string(),
            name: product.name.clone().unwrap_or_default(),
            price: product
                .price
                .clone()
                .or_else(|| product.extra.get("price").map(ToString::to_string))
                .unwrap_or_default(),
            slug: product.slug.clone().unwrap_or_default(),
            description: product.description.clone().unwrap_or_default(),
            poster_preview: is_valid_remote_image(&poster, allowed_hosts).then(|| poster.clone()),
            poster,
            images: product.images.as_deref().unwrap_or_default().join("\n"),
            status_chip: (!status.is_empty()).then(|| Chip::new(&status)),
            status,
            visibility_chip: (!visibility.is_empty()).then(|| Chip::new(&visibility)),
            visibility,
            last_updated: product.last_updated.as_deref().map(format_date),
        }
    }
}

/// Product editor template.
#[derive(Template)]
#[template(path = "products/show.html")]
pub struct ProductTemplate {
    pub current_path: String,
    pub alert: Option<Alert>,
    pub product: ProductView,
}

fn product_path(id: &str) -> String {
    format!("/admin/products/{id}")
}

/// `GET /admin/products/{id}` - product editor.
#[instrument(skip(state, raw_query))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RawQuery(raw_query): RawQuery,
    Query(query): Query<ProductQuery>,
) -> Result<Html<String>, AppError> {
    let path = product_path(&id);
    let cache_key = query
        .alert
        .is_none()
        .then(|| CacheKey::new(path.clone(), raw_query.as_deref()));

    if let Some(key) = &cache_key
        && let Some(html) = state.render_cache().get(key).await
    {
        debug!("Cache hit for product page");
        return Ok(Html(html.to_string()));
    }

    let product = ProductRepository::new(state.store())
        .get(&ProductId::new(id.as_str()))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let template = ProductTemplate {
        alert: Alert::from_query(query.alert.as_deref(), query.status.as_deref(), &path),
        current_path: path,
        product: ProductView::new(&product, &state.config().image_hosts),
    };

    Ok(render_page(&state, cache_key, &template).await)
}

/// Product form submission. Blank fields leave the stored value unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct ProductSubmission {
    pub name: Option<String>,
    pub price: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub poster: Option<String>,
    /// One image URL per line.
    pub images: Option<String>,
    pub status: Option<String>,
    pub visibility: Option<String>,
}

impl ProductSubmission {
    /// Fields to merge over the stored product.
    #[must_use]
    pub fn into_update(self) -> ProductUpdate {
        let images = non_blank(self.images).map(|images| {
            images
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        });

        ProductUpdate {
            name: non_blank(self.name),
            price: non_blank(self.price),
            slug: non_blank(self.slug),
            description: non_blank(self.description),
            poster: non_blank(self.poster),
            images,
            status: non_blank(self.status),
            visibility: non_blank(self.visibility),
            ..ProductUpdate::default()
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// `POST /admin/products/{id}` - save the product.
#[instrument(skip(state, submission))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(submission): Form<ProductSubmission>,
) -> Redirect {
    let changes = submission.into_update();
    let outcome = update_product(&state, &ProductId::new(id.as_str()), &changes).await;
    redirect_with_outcome(&product_path(&id), outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_are_left_out() {
        let update = ProductSubmission {
            name: Some("  ".to_string()),
            price: Some("12.00".to_string()),
            images: Some("https://cdn.example.com/a.jpg\n\n https://cdn.example.com/b.jpg ".to_string()),
            ..ProductSubmission::default()
        }
        .into_update();

        assert!(update.name.is_none());
        assert_eq!(update.price.as_deref(), Some("12.00"));
        assert_eq!(
            update.images,
            Some(vec![
                "https://cdn.example.com/a.jpg".to_string(),
                "https://cdn.example.com/b.jpg".to_string()
            ])
        );
    }
}
