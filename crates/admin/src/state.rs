//! Application state shared across handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::AdminConfig;
use crate::db::DocumentStore;
use crate::revalidation::RenderCache;

/// Source of the current time, swappable so campaign status can be pinned.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the document store, render cache and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    store: Arc<dyn DocumentStore>,
    render_cache: RenderCache,
    clock: Clock,
}

impl AppState {
    /// Create a new application state using the system clock.
    #[must_use]
    pub fn new(config: AdminConfig, store: Arc<dyn DocumentStore>) -> Self {
        Self::with_clock(config, store, Arc::new(Utc::now))
    }

    /// Create a new application state with a fixed time source.
    #[must_use]
    pub fn with_clock(config: AdminConfig, store: Arc<dyn DocumentStore>, clock: Clock) -> Self {
        let render_cache = RenderCache::new(config.render_cache_ttl);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                render_cache,
                clock,
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the document store.
    #[must_use]
    pub fn store(&self) -> &dyn DocumentStore {
        self.inner.store.as_ref()
    }

    /// Get a reference to the rendered page cache.
    #[must_use]
    pub fn render_cache(&self) -> &RenderCache {
        &self.inner.render_cache
    }

    /// The current time.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        (self.inner.clock)()
    }
}
