//! Integration tests for Merchdesk.
//!
//! Tests drive the full admin router in-process against the in-memory
//! document store, with the clock pinned so campaign statuses are stable.
//!
//! ```bash
//! cargo test -p merchdesk-integration-tests
//! ```

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode, header};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use merchdesk_admin::config::AdminConfig;
use merchdesk_admin::db::{DocumentStore, MemoryDocumentStore};
use merchdesk_admin::state::{AppState, Clock};

/// Admin router plus direct access to its store.
pub struct TestContext {
    pub store: Arc<MemoryDocumentStore>,
    pub app: Router,
}

impl TestContext {
    /// Fresh empty store, default config, clock fixed at `now`.
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        Self::with_config(AdminConfig::in_memory(), now)
    }

    #[must_use]
    pub fn with_config(config: AdminConfig, now: DateTime<Utc>) -> Self {
        Self::with_clock(config, Arc::new(move || now))
    }

    /// Fresh empty store driven by `clock`, for tests that move time.
    #[must_use]
    pub fn with_clock(config: AdminConfig, clock: Clock) -> Self {
        let store = Arc::new(MemoryDocumentStore::new());
        let state = AppState::with_clock(config, store.clone(), clock);
        Self {
            app: merchdesk_admin::app(state),
            store,
        }
    }

    /// Insert a document; `data` must be a JSON object.
    pub async fn seed(&self, collection: &str, id: &str, data: Value) {
        self.store
            .set(collection, id, data.as_object().cloned().unwrap())
            .await
            .unwrap();
    }

    /// Read a stored document back.
    pub async fn document(&self, collection: &str, id: &str) -> Option<Value> {
        self.store
            .get(collection, id)
            .await
            .unwrap()
            .map(Value::Object)
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    /// Submit a URL-encoded form, as the dashboard does.
    pub async fn post_form(&self, uri: &str, form: &str) -> Response<Body> {
        self.send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn send_json(&self, method: Method, uri: &str, body: &Value) -> Response<Body> {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.unwrap()
    }
}

/// Collect a response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

/// The `Location` of a redirect, asserting it is a 303.
pub fn redirect_location(response: &Response<Body>) -> String {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string()
}
