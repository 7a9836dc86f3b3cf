//! Item service trait definition.

use async_trait::async_trait;
use catalog_core::{CatalogResult, Item, ItemQueryOptions};

/// Cache-aside access to items.
///
/// Reads are served from the cache when possible; writes always go to the
/// store first and then invalidate the affected keys. Only store failures are
/// returned to the caller.
#[async_trait]
pub trait ItemService: Send + Sync {
    /// Returns every item.
    async fn get_all(&self, options: ItemQueryOptions) -> CatalogResult<Vec<Item>>;

    /// Returns one item.
    async fn get_by_id(&self, id: &str, options: ItemQueryOptions) -> CatalogResult<Item>;

    /// Stores a new item. The id is chosen by the caller.
    async fn create(&self, item: Item) -> CatalogResult<Item>;

    /// Replaces an existing item's title and description.
    async fn update(&self, item: Item) -> CatalogResult<Item>;

    /// Deletes an item.
    async fn delete(&self, id: &str) -> CatalogResult<()>;
}
