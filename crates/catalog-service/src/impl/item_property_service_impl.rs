//! Cache-aside item property service.

use crate::cache::{cache_keys, CacheExt, CachePort, DEFAULT_TTL};
use crate::item_property_service::ItemPropertyService;
use async_trait::async_trait;
use catalog_core::{CatalogResult, ItemProperty, ValidateExt};
use catalog_repository::ItemPropertyRepository;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Item property service backed by an [`ItemPropertyRepository`] and a [`CachePort`].
///
/// Writes under one item only touch that item's keys.
pub struct ItemPropertyServiceImpl {
    repository: Arc<dyn ItemPropertyRepository>,
    cache: Arc<dyn CachePort>,
    ttl: Duration,
}

impl ItemPropertyServiceImpl {
    /// Creates a new property service caching reads for [`DEFAULT_TTL`].
    pub fn new(repository: Arc<dyn ItemPropertyRepository>, cache: Arc<dyn CachePort>) -> Self {
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

impl std::fmt::Debug for ItemPropertyServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemPropertyServiceImpl")
            .field("backend", &self.cache.backend())
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ItemPropertyService for ItemPropertyServiceImpl {
    async fn get_all(&self, item_id: &str) -> CatalogResult<Vec<ItemProperty>> {
        debug!("Getting properties of item: {}", item_id);

        self.cache
            .get_or_load(&cache_keys::item_properties_list(item_id), self.ttl, || {
                self.repository.get_all_by_item_id(item_id)
            })
            .await
    }

    async fn get_by_id(&self, item_id: &str, id: &str) -> CatalogResult<ItemProperty> {
        debug!(item_id, "Getting item property: {}", id);

        self.cache
            .get_or_load(&cache_keys::item_property(item_id, id), self.ttl, || {
                self.repository.get_by_id(item_id, id)
            })
            .await
    }

    async fn create(&self, property: ItemProperty) -> CatalogResult<ItemProperty> {
        debug!(item_id = %property.item_id, "Creating item property: {}", property.id);
        property.validate_request()?;

        let created = self.repository.create(&property).await?;
        self.cache
            .invalidate(&[cache_keys::item_properties_list(&created.item_id)])
            .await;

        info!(item_id = %created.item_id, "Item property created: {}", created.id);
        Ok(created)
    }

    async fn update(&self, property: ItemProperty) -> CatalogResult<ItemProperty> {
        debug!(item_id = %property.item_id, "Updating item property: {}", property.id);
        property.validate_request()?;

        let updated = self.repository.update(&property).await?;
        self.cache
            .invalidate(&[
                cache_keys::item_property(&updated.item_id, &updated.id),
                cache_keys::item_properties_list(&updated.item_id),
            ])
            .await;

        info!(item_id = %updated.item_id, "Item property updated: {}", updated.id);
        Ok(updated)
    }

    async fn delete(&self, item_id: &str, id: &str) -> CatalogResult<()> {
        debug!(item_id, "Deleting item property: {}", id);

        self.repository.delete(item_id, id).await?;
        self.cache
            .invalidate(&[
                cache_keys::item_property(item_id, id),
                cache_keys::item_properties_list(item_id),
            ])
            .await;

        info!(item_id, "Item property deleted: {}", id);
        Ok(())
    }
}
