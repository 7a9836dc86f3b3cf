//! Application state for Axum handlers.

use catalog_repository::DatabaseHealthCheck;
use catalog_service::{CachePort, ItemPropertyService, ItemService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub item_service: Arc<dyn ItemService>,
    pub item_property_service: Arc<dyn ItemPropertyService>,
    /// Cache selected at startup, probed by the readiness check.
    pub cache: Arc<dyn CachePort>,
    pub database: Arc<dyn DatabaseHealthCheck>,
    /// Bearer token accepted by the write routes.
    pub api_token: Arc<str>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        item_service: Arc<dyn ItemService>,
        item_property_service: Arc<dyn ItemPropertyService>,
        cache: Arc<dyn CachePort>,
        database: Arc<dyn DatabaseHealthCheck>,
        api_token: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            item_service,
            item_property_service,
            cache,
            database,
            api_token: api_token.into(),
        }
    }
}
