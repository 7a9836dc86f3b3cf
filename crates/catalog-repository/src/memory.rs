//! In-memory stores for tests.
//!
//! Both stores share one set of tables so that item deletes cascade and
//! `include_properties` reads see the properties, like the MySQL schema.
//! Every call is counted, and reads or writes can be made to fail on demand.

use crate::traits::{ItemPropertyRepository, ItemRepository};
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult, Item, ItemProperty, ItemQueryOptions};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct Tables {
    items: Mutex<Vec<Item>>,
    properties: Mutex<Vec<ItemProperty>>,
}

impl Tables {
    fn items(&self) -> MutexGuard<'_, Vec<Item>> {
        self.items.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn properties(&self) -> MutexGuard<'_, Vec<ItemProperty>> {
        self.properties
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// Call counters and failure switches shared by both in-memory stores.
#[derive(Default)]
pub struct StoreProbe {
    reads: AtomicUsize,
    writes: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl StoreProbe {
    /// Number of read calls so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of write calls so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Makes every following read fail with a database error.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every following write fail with a database error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn read(&self) -> CatalogResult<()> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CatalogError::database("injected read failure"));
        }
        Ok(())
    }

    fn write(&self) -> CatalogResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CatalogError::database("injected write failure"));
        }
        Ok(())
    }
}

/// In-memory item store.
pub struct InMemoryItemRepository {
    tables: Arc<Tables>,
    probe: StoreProbe,
}

/// In-memory item property store.
pub struct InMemoryItemPropertyRepository {
    tables: Arc<Tables>,
    probe: StoreProbe,
}

/// Creates an item store and a property store over the same tables.
#[must_use]
pub fn in_memory_stores() -> (Arc<InMemoryItemRepository>, Arc<InMemoryItemPropertyRepository>) {
    let tables = Arc::new(Tables::default());
    (
        Arc::new(InMemoryItemRepository {
            tables: Arc::clone(&tables),
            probe: StoreProbe::default(),
        }),
        Arc::new(InMemoryItemPropertyRepository {
            tables,
            probe: StoreProbe::default(),
        }),
    )
}

impl InMemoryItemRepository {
    /// Counters and failure switches of this store.
    pub fn probe(&self) -> &StoreProbe {
        &self.probe
    }

    /// Inserts an item without touching the counters.
    pub fn seed(&self, item: Item) {
        self.tables.items().push(item);
    }

    fn with_properties(&self, mut item: Item, options: ItemQueryOptions) -> Item {
        if options.include_properties {
            let properties = self
                .tables
                .properties()
                .iter()
                .filter(|p| p.item_id == item.id)
                .cloned()
                .collect();
            item.item_properties = Some(properties);
        }
        item
    }
}

impl InMemoryItemPropertyRepository {
    /// Counters and failure switches of this store.
    pub fn probe(&self) -> &StoreProbe {
        &self.probe
    }

    /// Inserts a property without touching the counters.
    pub fn seed(&self, property: ItemProperty) {
        self.tables.properties().push(property);
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn get_all(&self, options: ItemQueryOptions) -> CatalogResult<Vec<Item>> {
        self.probe.read()?;
        let items = self.tables.items().clone();
        Ok(items
            .into_iter()
            .map(|item| self.with_properties(item, options))
            .collect())
    }

    async fn get_by_id(&self, id: &str, options: ItemQueryOptions) -> CatalogResult<Item> {
        self.probe.read()?;
        let item = self
            .tables
            .items()
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found("Item", id))?;
        Ok(self.with_properties(item, options))
    }

    async fn create(&self, item: &Item) -> CatalogResult<Item> {
        self.probe.write()?;
        let mut items = self.tables.items();
        if items.iter().any(|i| i.id == item.id) {
            return Err(CatalogError::conflict(format!("Duplicate entry '{}'", item.id)));
        }
        let mut stored = item.clone();
        stored.item_properties = None;
        items.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, item: &Item) -> CatalogResult<Item> {
        self.probe.write()?;
        let mut items = self.tables.items();
        let stored = items
            .iter_mut()
            .find(|i| i.id == item.id)
            .ok_or_else(|| CatalogError::not_found("Item", &item.id))?;
        stored.title.clone_from(&item.title);
        stored.description.clone_from(&item.description);
        stored.updated_at = item.updated_at;
        Ok(stored.clone())
    }

    async fn delete(&self, id: &str) -> CatalogResult<()> {
        self.probe.write()?;
        let mut items = self.tables.items();
        let before = items.len();
        items.retain(|i| i.id != id);
        if items.len() == before {
            return Err(CatalogError::not_found("Item", id));
        }
        self.tables.properties().retain(|p| p.item_id != id);
        Ok(())
    }
}

#[async_trait]
impl ItemPropertyRepository for InMemoryItemPropertyRepository {
    async fn get_all_by_item_id(&self, item_id: &str) -> CatalogResult<Vec<ItemProperty>> {
        self.probe.read()?;
        Ok(self
            .tables
            .properties()
            .iter()
            .filter(|p| p.item_id == item_id)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, item_id: &str, id: &str) -> CatalogResult<ItemProperty> {
        self.probe.read()?;
        self.tables
            .properties()
            .iter()
            .find(|p| p.item_id == item_id && p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found("ItemProperty", id))
    }

    async fn create(&self, property: &ItemProperty) -> CatalogResult<ItemProperty> {
        self.probe.write()?;
        if !self.tables.items().iter().any(|i| i.id == property.item_id) {
            return Err(CatalogError::not_found("Item", &property.item_id));
        }
        let mut properties = self.tables.properties();
        if properties.iter().any(|p| p.id == property.id) {
            return Err(CatalogError::conflict(format!("Duplicate entry '{}'", property.id)));
        }
        properties.push(property.clone());
        Ok(property.clone())
    }

    async fn update(&self, property: &ItemProperty) -> CatalogResult<ItemProperty> {
        self.probe.write()?;
        let mut properties = self.tables.properties();
        let stored = properties
            .iter_mut()
            .find(|p| p.item_id == property.item_id && p.id == property.id)
            .ok_or_else(|| CatalogError::not_found("ItemProperty", &property.id))?;
        stored.name.clone_from(&property.name);
        stored.value.clone_from(&property.value);
        Ok(stored.clone())
    }

    async fn delete(&self, item_id: &str, id: &str) -> CatalogResult<()> {
        self.probe.write()?;
        let mut properties = self.tables.properties();
        let before = properties.len();
        properties.retain(|p| !(p.item_id == item_id && p.id == id));
        if properties.len() == before {
            return Err(CatalogError::not_found("ItemProperty", id));
        }
        Ok(())
    }
}
