//! Cache-aside item service.

use crate::cache::{cache_keys, CacheExt, CachePort, DEFAULT_TTL};
use crate::item_service::ItemService;
use async_trait::async_trait;
use catalog_core::{CatalogResult, Item, ItemQueryOptions, ValidateExt};
use catalog_repository::ItemRepository;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Item service backed by an [`ItemRepository`] and a [`CachePort`].
pub struct ItemServiceImpl {
    repository: Arc<dyn ItemRepository>,
    cache: Arc<dyn CachePort>,
    ttl: Duration,
}

impl ItemServiceImpl {
    /// Creates a new item service caching reads for [`DEFAULT_TTL`].
    pub fn new(repository: Arc<dyn ItemRepository>, cache: Arc<dyn CachePort>) -> Self {
        Self {
            repository,
            cache,
            ttl: DEFAULT_TTL,
        }
    }

    /// Overrides the lifetime of cached reads.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl std::fmt::Debug for ItemServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemServiceImpl")
            .field("backend", &self.cache.backend())
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ItemService for ItemServiceImpl {
    async fn get_all(&self, options: ItemQueryOptions) -> CatalogResult<Vec<Item>> {
        debug!(?options, "Getting all items");

        if !options.is_cacheable() {
            return self.repository.get_all(options).await;
        }

        self.cache
            .get_or_load(&cache_keys::items_list(), self.ttl, || self.repository.get_all(options))
            .await
    }

    async fn get_by_id(&self, id: &str, options: ItemQueryOptions) -> CatalogResult<Item> {
        debug!(?options, "Getting item: {}", id);

        if !options.is_cacheable() {
            return self.repository.get_by_id(id, options).await;
        }

        self.cache
            .get_or_load(&cache_keys::item(id), self.ttl, || {
                self.repository.get_by_id(id, options)
            })
            .await
    }

    async fn create(&self, item: Item) -> CatalogResult<Item> {
        debug!("Creating item: {}", item.id);
        item.validate_request()?;

        let created = self.repository.create(&item).await?;
        self.cache.invalidate(&[cache_keys::items_list()]).await;

        info!("Item created: {}", created.id);
        Ok(created)
    }

    async fn update(&self, item: Item) -> CatalogResult<Item> {
        debug!("Updating item: {}", item.id);
        item.validate_request()?;

        let updated = self.repository.update(&item).await?;
        self.cache
            .invalidate(&[cache_keys::item(&updated.id), cache_keys::items_list()])
            .await;

        info!("Item updated: {}", updated.id);
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> CatalogResult<()> {
        debug!("Deleting item: {}", id);

        self.repository.delete(id).await?;
        // Property keys of this item are left to expire.
        self.cache
            .invalidate(&[cache_keys::item(id), cache_keys::items_list()])
            .await;

        info!("Item deleted: {}", id);
        Ok(())
    }
}
