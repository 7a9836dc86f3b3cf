//! Item property service trait definition.

use async_trait::async_trait;
use catalog_core::{CatalogResult, ItemProperty};

/// Cache-aside access to the properties of one item.
#[async_trait]
pub trait ItemPropertyService: Send + Sync {
    /// Returns every property of an item.
    async fn get_all(&self, item_id: &str) -> CatalogResult<Vec<ItemProperty>>;

    /// Returns one property of an item.
    async fn get_by_id(&self, item_id: &str, id: &str) -> CatalogResult<ItemProperty>;

    /// Stores a new property under `property.item_id`.
    async fn create(&self, property: ItemProperty) -> CatalogResult<ItemProperty>;

    /// Replaces an existing property's name and value.
    async fn update(&self, property: ItemProperty) -> CatalogResult<ItemProperty>;

    /// Deletes one property of an item.
    async fn delete(&self, item_id: &str, id: &str) -> CatalogResult<()>;
}
