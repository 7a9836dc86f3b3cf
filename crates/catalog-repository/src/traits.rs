//! Store port definitions.

use async_trait::async_trait;
use catalog_core::{CatalogResult, Item, ItemProperty, ItemQueryOptions};

/// Persistence contract for items.
///
/// Lookups, updates and deletes of a missing id fail with
/// [`catalog_core::CatalogError::NotFound`].
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Returns every item, with properties when `options` asks for them.
    async fn get_all(&self, options: ItemQueryOptions) -> CatalogResult<Vec<Item>>;

    /// Returns one item by id.
    async fn get_by_id(&self, id: &str, options: ItemQueryOptions) -> CatalogResult<Item>;

    /// Inserts a new item and returns the stored row.
    async fn create(&self, item: &Item) -> CatalogResult<Item>;

    /// Overwrites title, description and `updated_at` of an existing item.
    async fn update(&self, item: &Item) -> CatalogResult<Item>;

    /// Deletes an item; its properties go with it.
    async fn delete(&self, id: &str) -> CatalogResult<()>;
}

/// Persistence contract for item properties, always scoped by the owning item.
#[async_trait]
pub trait ItemPropertyRepository: Send + Sync {
    /// Returns every property of an item.
    async fn get_all_by_item_id(&self, item_id: &str) -> CatalogResult<Vec<ItemProperty>>;

    /// Returns one property of an item.
    async fn get_by_id(&self, item_id: &str, id: &str) -> CatalogResult<ItemProperty>;

    /// Inserts a new property and returns the stored row.
    async fn create(&self, property: &ItemProperty) -> CatalogResult<ItemProperty>;

    /// Overwrites name and value of an existing property.
    async fn update(&self, property: &ItemProperty) -> CatalogResult<ItemProperty>;

    /// Deletes one property of an item.
    async fn delete(&self, item_id: &str, id: &str) -> CatalogResult<()>;
}
