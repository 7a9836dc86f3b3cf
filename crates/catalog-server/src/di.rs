//! Dependency wiring.
//!
//! Everything is built once at startup and handed down by constructor as
//! `Arc<dyn Trait>`; there are no globals.

use catalog_config::AppConfig;
use catalog_core::CatalogResult;
use catalog_repository::{
    create_pool, DatabasePool, DatabasePoolInterface, ItemPropertyRepository, ItemRepository,
    MySqlItemPropertyRepository, MySqlItemRepository,
};
use catalog_rest::AppState;
use catalog_service::{
    select_cache, CachePort, ItemPropertyService, ItemPropertyServiceImpl, ItemService,
    ItemServiceImpl,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Entity services sharing one cache backend.
#[derive(Clone)]
pub struct Services {
    pub item_service: Arc<dyn ItemService>,
    pub item_property_service: Arc<dyn ItemPropertyService>,
}

/// Builds both entity services over the given stores and cache.
pub fn build_services(
    items: Arc<dyn ItemRepository>,
    item_properties: Arc<dyn ItemPropertyRepository>,
    cache: Arc<dyn CachePort>,
    ttl: Duration,
) -> Services {
    Services {
        item_service: Arc::new(ItemServiceImpl::new(items, Arc::clone(&cache)).with_ttl(ttl)),
        item_property_service: Arc::new(
            ItemPropertyServiceImpl::new(item_properties, cache).with_ttl(ttl),
        ),
    }
}

/// Fully wired application.
pub struct AppContainer {
    pub db_pool: Arc<DatabasePool>,
    pub cache: Arc<dyn CachePort>,
    pub services: Services,
}

impl AppContainer {
    /// Connects the database, selects the cache backend and builds the services.
    ///
    /// Fails when the database is unreachable or when neither cache backend
    /// can be set up.
    pub async fn build(config: &AppConfig) -> CatalogResult<Self> {
        let db_pool = create_pool(&config.database).await?;

        if config.database.run_migrations {
            db_pool.run_migrations().await?;
        }

        let cache = select_cache(&config.redis, &config.cache).await?;
        info!(backend = cache.backend(), "Cache backend selected");

        let pool: Arc<dyn DatabasePoolInterface> = db_pool.clone();
        let services = build_services(
            Arc::new(MySqlItemRepository::new(Arc::clone(&pool))),
            Arc::new(MySqlItemPropertyRepository::new(pool)),
            Arc::clone(&cache),
            config.cache.ttl(),
        );

        Ok(Self {
            db_pool,
            cache,
            services,
        })
    }

    /// Builds the state shared by the HTTP handlers.
    pub fn app_state(&self, api_token: &str) -> AppState {
        AppState::new(
            Arc::clone(&self.services.item_service),
            Arc::clone(&self.services.item_property_service),
            Arc::clone(&self.cache),
            self.db_pool.clone(),
            api_token,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{Item, ItemQueryOptions};
    use catalog_repository::memory::in_memory_stores;
    use catalog_service::FileCache;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_services_share_the_cache() {
        let dir = TempDir::new().unwrap();
        let cache: Arc<dyn CachePort> = Arc::new(FileCache::open(dir.path()).await.unwrap());
        let (items, properties) = in_memory_stores();

        let services = build_services(
            items.clone(),
            properties,
            Arc::clone(&cache),
            Duration::from_secs(60),
        );

        services
            .item_service
            .create(Item::new("I1", "Widget", ""))
            .await
            .unwrap();
        services
            .item_service
            .get_by_id("I1", ItemQueryOptions::default())
            .await
            .unwrap();

        assert!(cache.exists("item:I1").await.unwrap());
        assert_eq!(items.probe().reads(), 1);
    }
}
