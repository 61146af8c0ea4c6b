//! Rendered page cache and revalidation.
//!
//! Admin pages are rendered once and served from a `moka` cache until a
//! write revalidates them. Writes name either a concrete path
//! (`/admin/shop`) or a route pattern with dynamic segments
//! (`/admin/products/[id]`), which drops every cached page the route renders.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use moka::future::Cache;
use tracing::debug;

/// Cache key: request path plus raw query string.
///
/// Pages whose content depends on today's date also carry the UTC day, so a
/// rendering never outlives the day it was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub path: String,
    pub query: String,
    pub day: Option<NaiveDate>,
}

impl CacheKey {
    #[must_use]
    pub fn new(path: impl Into<String>, query: Option<&str>) -> Self {
        Self {
            path: path.into(),
            query: query.unwrap_or_default().to_string(),
            day: None,
        }
    }

    /// Scope the key to one UTC day.
    #[must_use]
    pub fn with_day(mut self, day: NaiveDate) -> Self {
        self.day = Some(day);
        self
    }
}

/// Cache of rendered admin pages.
#[derive(Clone)]
pub struct RenderCache {
    cache: Cache<CacheKey, Arc<str>>,
}

impl RenderCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(500)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }

    pub async fn get(&self, key: &CacheKey) -> Option<Arc<str>> {
        self.cache.get(key).await
    }

    pub async fn insert(&self, key: CacheKey, html: impl Into<Arc<str>>) {
        self.cache.insert(key, html.into()).await;
    }

    /// Drop every cached rendering of `path`, whatever its query string.
    pub async fn revalidate_path(&self, path: &str) {
        self.invalidate_where(|key| key.path == path).await;
    }

    /// Drop every cached page rendered by the route `pattern`.
    ///
    /// A `[name]` segment matches any single non-empty path segment.
    pub async fn revalidate_route(&self, pattern: &str) {
        self.invalidate_where(|key| route_matches(pattern, &key.path))
            .await;
    }

    /// Drop everything.
    pub async fn clear(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
    }

    async fn invalidate_where(&self, predicate: impl Fn(&CacheKey) -> bool) {
        let stale: Vec<Arc<CacheKey>> = self
            .cache
            .iter()
            .filter(|(key, _)| predicate(key))
            .map(|(key, _)| key)
            .collect();

        for key in stale {
            debug!(path = %key.path, query = %key.query, "Revalidating cached page");
            self.cache.invalidate(key.as_ref()).await;
        }
    }
}

/// Whether `path` is rendered by the route `pattern`.
#[must_use]
pub fn route_matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segments = pattern.trim_end_matches('/').split('/');
    let mut path_segments = path.trim_end_matches('/').split('/');

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(expected), Some(actual)) => {
                let dynamic = expected.starts_with('[') && expected.ends_with(']');
                if dynamic {
                    if actual.is_empty() {
                        return false;
                    }
                } else if expected != actual {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_route_matches_dynamic_segment() {
        assert!(route_matches("/admin/products/[id]", "/admin/products/p1"));
        assert!(route_matches("/admin/products/[id]", "/admin/products/p1/"));
        assert!(!route_matches("/admin/products/[id]", "/admin/products"));
        assert!(!route_matches("/admin/products/[id]", "/admin/products/p1/edit"));
        assert!(!route_matches("/admin/products/[id]", "/admin/shop/p1"));
    }

    #[test]
    fn test_route_matches_static_path() {
        assert!(route_matches("/admin/shop", "/admin/shop"));
        assert!(!route_matches("/admin/shop", "/admin/shop/collections"));
    }

    #[tokio::test]
    async fn test_revalidate_path_drops_all_queries() {
        let cache = RenderCache::new(Duration::from_secs(60));
        cache.insert(CacheKey::new("/admin/shop", None), "a").await;
        cache
            .insert(CacheKey::new("/admin/shop", Some("page=2")), "b")
            .await;
        cache
            .insert(CacheKey::new("/admin/products/p1", None), "c")
            .await;

        cache.revalidate_path("/admin/shop").await;

        assert!(cache.get(&CacheKey::new("/admin/shop", None)).await.is_none());
        assert!(
            cache
                .get(&CacheKey::new("/admin/shop", Some("page=2")))
                .await
                .is_none()
        );
        assert_eq!(
            cache
                .get(&CacheKey::new("/admin/products/p1", None))
                .await
                .as_deref(),
            Some("c")
        );
    }

    #[tokio::test]
    async fn test_day_scoped_keys_are_distinct_and_revalidated_together() {
        let cache = RenderCache::new(Duration::from_secs(60));
        let monday = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();
        cache
            .insert(CacheKey::new("/admin/shop", None).with_day(monday), "monday")
            .await;

        assert!(
            cache
                .get(&CacheKey::new("/admin/shop", None).with_day(tuesday))
                .await
                .is_none()
        );
        assert!(cache.get(&CacheKey::new("/admin/shop", None)).await.is_none());

        cache
            .insert(CacheKey::new("/admin/shop", None).with_day(tuesday), "tuesday")
            .await;
        cache.revalidate_path("/admin/shop").await;

        assert!(
            cache
                .get(&CacheKey::new("/admin/shop", None).with_day(monday))
                .await
                .is_none()
        );
        assert!(
            cache
                .get(&CacheKey::new("/admin/shop", None).with_day(tuesday))
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_revalidate_route_drops_every_product_page() {
        let cache = RenderCache::new(Duration::from_secs(60));
        cache
            .insert(CacheKey::new("/admin/products/p1", None), "one")
            .await;
        cache
            .insert(CacheKey::new("/admin/products/p2", None), "two")
            .await;
        cache.insert(CacheKey::new("/admin/shop", None), "shop").await;

        cache.revalidate_route("/admin/products/[id]").await;

        assert!(
            cache
                .get(&CacheKey::new("/admin/products/p1", None))
                .await
                .is_none()
        );
        assert!(
            cache
                .get(&CacheKey::new("/admin/products/p2", None))
                .await
                .is_none()
        );
        assert!(cache.get(&CacheKey::new("/admin/shop", None)).await.is_some());
    }
}
