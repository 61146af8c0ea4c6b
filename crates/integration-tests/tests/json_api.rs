//! Integration tests for the JSON API and the product editor.

#![allow(clippy::unwrap_used)]

use axum::http::{Method, StatusCode};
use chrono::{TimeZone, Utc};
use serde_json::json;

use merchdesk_core::CampaignStatus;
use merchdesk_integration_tests::{TestContext, body_json, body_text, redirect_location};

fn context() -> TestContext {
    TestContext::at(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap())
}

async fn seed_product(ctx: &TestContext) {
    ctx.seed(
        "products",
        "p1",
        json!({
            "name": "Linen Shirt",
            "price": "49.00",
            "slug": "linen-shirt",
            "images": ["https://cdn.example.com/a.jpg"],
            "status": "PUBLISHED",
            "visibility": "VISIBLE",
            "supplier": "Acme Mills",
        }),
    )
    .await;
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    let ctx = context();
    let response = ctx.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");

    assert_eq!(ctx.get("/health/ready").await.status(), StatusCode::OK);
}

// =============================================================================
// Products
// =============================================================================

#[tokio::test]
async fn test_get_missing_product_is_not_found() {
    let ctx = context();
    let response = ctx.get("/api/products/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = ctx.get("/admin/products/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_product_merges_and_stamps_last_updated() {
    let ctx = context();
    seed_product(&ctx).await;

    let response = ctx
        .send_json(
            Method::PATCH,
            "/api/products/p1",
            &json!({ "name": "Linen Shirt II" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"]["flag"], "success");
    assert_eq!(body["status"]["message"], "Product updated");

    let product = body_json(ctx.get("/api/products/p1").await).await;
    assert_eq!(product["name"], "Linen Shirt II");
    assert_eq!(product["price"], "49.00");
    assert_eq!(product["supplier"], "Acme Mills");
    assert_eq!(product["last_updated"], "2024-01-15T12:00:00.000Z");
}

#[tokio::test]
async fn test_product_editor_renders_and_revalidates() {
    let ctx = context();
    seed_product(&ctx).await;

    let html = body_text(ctx.get("/admin/products/p1").await).await;
    assert!(html.contains("Linen Shirt"));

    let response = ctx
        .post_form("/admin/products/p1", "name=Oxford%20Shirt&price=55.00")
        .await;
    assert_eq!(
        redirect_location(&response),
        "/admin/products/p1?alert=Product%20updated&status=success"
    );

    let html = body_text(ctx.get("/admin/products/p1").await).await;
    assert!(html.contains("Oxford Shirt"));
    assert!(html.contains("55.00"));
}

#[tokio::test]
async fn test_loosely_typed_product_reads_and_patches() {
    let ctx = context();
    ctx.seed(
        "products",
        "p2",
        json!({
            "name": "Tee",
            "price": 49,
            "colors": [{ "name": "Sand" }],
            "last_updated": 1_700_000_000,
        }),
    )
    .await;

    let response = ctx.get("/api/products/p2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let product = body_json(response).await;
    assert_eq!(product["name"], "Tee");
    assert_eq!(product["price"], 49);
    assert_eq!(product["colors"][0]["name"], "Sand");

    let response = ctx
        .send_json(Method::PATCH, "/api/products/p2", &json!({ "name": "New Tee" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"]["message"], "Product updated");

    let stored = ctx.document("products", "p2").await.unwrap();
    assert_eq!(stored["name"], "New Tee");
    assert_eq!(stored["price"], 49);
    assert_eq!(stored["last_updated"], "2024-01-15T12:00:00.000Z");
}

#[tokio::test]
async fn test_product_editor_handles_loosely_typed_product() {
    let ctx = context();
    ctx.seed("products", "p2", json!({ "name": "Tee", "price": 49 }))
        .await;

    let response = ctx.get("/admin/products/p2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"value="49""#));

    let response = ctx.post_form("/admin/products/p2", "name=New%20Tee").await;
    assert_eq!(
        redirect_location(&response),
        "/admin/products/p2?alert=Product%20updated&status=success"
    );

    let html = body_text(ctx.get("/admin/products/p2").await).await;
    assert!(html.contains("New Tee"));
}

// =============================================================================
// Page hero
// =============================================================================

#[tokio::test]
async fn test_put_page_hero_validates_visible_hero() {
    let ctx = context();
    ctx.seed("page_hero", "main", json!({ "visibility": "HIDDEN" }))
        .await;

    let response = ctx
        .send_json(
            Method::PUT,
            "/api/page-hero",
            &json!({ "id": "main", "title": "Sale", "visibility": "VISIBLE" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"]["message"], "Please provide the image");

    let response = ctx
        .send_json(
            Method::PUT,
            "/api/page-hero",
            &json!({
                "id": "main",
                "title": "Sale",
                "image": "https://cdn.example.com/sale.jpg",
                "destination_url": "/sale",
                "visibility": "VISIBLE",
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let hero = body_json(ctx.get("/api/page-hero").await).await;
    assert_eq!(hero["title"], "Sale");
    assert_eq!(hero["visibility"], "VISIBLE");
}

// =============================================================================
// Collections
// =============================================================================

#[tokio::test]
async fn test_list_collections_pages_with_status() {
    let ctx = context();
    for (id, index, start, end) in [
        ("spring", 1, "2024-03-01", "2024-03-31"),
        ("winter", 2, "2024-01-01", "2024-01-15"),
        ("autumn", 3, "2023-09-01", "2023-11-30"),
    ] {
        ctx.seed(
            "collections",
            id,
            json!({
                "index": index,
                "title": id,
                "campaign_duration": { "start_date": start, "end_date": end },
                "collection_type": "PROMOTIONAL_BANNER",
            }),
        )
        .await;
    }

    let first = body_json(ctx.get("/api/collections").await).await;
    assert_eq!(first["page"], 1);
    assert_eq!(first["total_pages"], 2);
    assert_eq!(first["items"][0]["id"], "spring");
    assert_eq!(
        first["items"][0]["campaign_status"],
        serde_json::to_value(CampaignStatus::Upcoming).unwrap()
    );
    // The end date is inside the campaign.
    assert_eq!(
        first["items"][1]["campaign_status"],
        serde_json::to_value(CampaignStatus::Active).unwrap()
    );

    let second = body_json(ctx.get("/api/collections?page=2").await).await;
    assert_eq!(second["items"].as_array().unwrap().len(), 1);
    assert_eq!(second["items"][0]["id"], "autumn");

    let beyond = body_json(ctx.get("/api/collections?page=5").await).await;
    assert!(beyond["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_patch_collection_reports_missing_collection() {
    let ctx = context();
    let response = ctx
        .send_json(Method::PATCH, "/api/collections/ghost", &json!({ "index": 4 }))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["status"]["flag"], "failed");
    assert_eq!(body["status"]["message"], "Error updating collection");
}

// =============================================================================
// Categories
// =============================================================================

#[tokio::test]
async fn test_put_categories_updates_section_and_categories() {
    let ctx = context();
    ctx.seed("categories", "tops", json!({ "index": 1, "visibility": "HIDDEN" }))
        .await;

    let response = ctx
        .send_json(
            Method::PUT,
            "/api/categories",
            &json!({
                "section_visibility": "VISIBLE",
                "categories": [{ "id": "tops", "visibility": "VISIBLE" }],
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(ctx.get("/api/categories").await).await;
    assert_eq!(body["section"]["visibility"], "VISIBLE");
    assert_eq!(body["categories"][0]["visibility"], "VISIBLE");
}
