//! # Catalog Repository
//!
//! Store ports for items and item properties, plus their MySQL
//! implementations on top of SQLx.
//!
//! ```text
//! Entity service
//!   ↓  Arc<dyn ItemRepository> / Arc<dyn ItemPropertyRepository>
//! MySqlItemRepository / MySqlItemPropertyRepository
//!   ↓  Arc<dyn DatabasePoolInterface>
//! MySQL
//! ```

pub mod mysql;
pub mod pool;
pub mod traits;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

pub use mysql::*;
pub use pool::*;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::memory::in_memory_stores;
    use super::*;
    use catalog_core::{Item, ItemProperty, ItemQueryOptions};

    #[tokio::test]
    async fn test_create_and_get_item() {
        let (items, _) = in_memory_stores();
        let item = Item::new("I1", "Widget", "A widget");

        items.create(&item).await.unwrap();

        let found = items.get_by_id("I1", ItemQueryOptions::default()).await.unwrap();
        assert_eq!(found.title, "Widget");
        assert!(found.item_properties.is_none());
        assert_eq!(items.probe().writes(), 1);
        assert_eq!(items.probe().reads(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_item_is_not_found() {
        let (items, _) = in_memory_stores();
        let err = items.get_by_id("nope", ItemQueryOptions::default()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_item() {
        let (items, _) = in_memory_stores();
        let item = Item::new("I1", "Widget", "");
        assert!(items.update(&item).await.unwrap_err().is_not_found());
        assert!(items.delete("I1").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_include_properties() {
        let (items, properties) = in_memory_stores();
        items.seed(Item::new("I1", "Widget", ""));
        items.seed(Item::new("I2", "Gadget", ""));
        properties.seed(ItemProperty::new("P1", "I1", "color", "red"));

        let loaded = items.get_all(ItemQueryOptions::with_properties()).await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].item_properties.as_ref().map(Vec::len), Some(1));
        assert_eq!(loaded[1].item_properties.as_ref().map(Vec::len), Some(0));

        let plain = items.get_all(ItemQueryOptions::default()).await.unwrap();
        assert!(plain.iter().all(|i| i.item_properties.is_none()));
    }

    #[tokio::test]
    async fn test_item_delete_cascades_to_properties() {
        let (items, properties) = in_memory_stores();
        items.seed(Item::new("I1", "Widget", ""));
        properties.seed(ItemProperty::new("P1", "I1", "color", "red"));

        items.delete("I1").await.unwrap();

        assert!(properties.get_all_by_item_id("I1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_property_lookups_are_scoped_by_item() {
        let (items, properties) = in_memory_stores();
        items.seed(Item::new("I1", "Widget", ""));
        items.seed(Item::new("I2", "Gadget", ""));
        properties.seed(ItemProperty::new("P1", "I1", "color", "red"));

        assert!(properties.get_by_id("I1", "P1").await.is_ok());
        assert!(properties.get_by_id("I2", "P1").await.unwrap_err().is_not_found());
        assert!(properties.delete("I2", "P1").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_property_create_requires_item() {
        let (_, properties) = in_memory_stores();
        let err = properties
            .create(&ItemProperty::new("P1", "missing", "color", "red"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let (items, _) = in_memory_stores();
        items.probe().fail_writes(true);
        let err = items.create(&Item::new("I1", "Widget", "")).await.unwrap_err();
        assert_eq!(err.error_code(), "DATABASE_ERROR");

        items.probe().fail_reads(true);
        assert!(items.get_all(ItemQueryOptions::default()).await.is_err());
    }
}
