//! MySQL item store.

use super::item_property_repository::ItemPropertyRow;
use crate::{traits::ItemRepository, DatabasePoolInterface};
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult, Item, ItemProperty, ItemQueryOptions};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// MySQL item store.
#[derive(Clone)]
pub struct MySqlItemRepository {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlItemRepository {
    /// Creates a new MySQL item store.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }

    async fn properties_of(&self, item_id: &str) -> CatalogResult<Vec<ItemProperty>> {
        let rows = sqlx::query_as::<_, ItemPropertyRow>(
            "SELECT id, item_id, name, value FROM item_properties WHERE item_id = ? ORDER BY name, id",
        )
        .bind(item_id)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(ItemProperty::from).collect())
    }

    async fn properties_by_item(&self) -> CatalogResult<HashMap<String, Vec<ItemProperty>>> {
        let rows = sqlx::query_as::<_, ItemPropertyRow>(
            "SELECT id, item_id, name, value FROM item_properties ORDER BY item_id, name, id",
        )
        .fetch_all(self.pool.inner())
        .await?;

        let mut grouped: HashMap<String, Vec<ItemProperty>> = HashMap::new();
        for row in rows {
            grouped
                .entry(row.item_id.clone())
                .or_default()
                .push(ItemProperty::from(row));
        }
        Ok(grouped)
    }
}

/// Database row representation of an item.
#[derive(Debug, FromRow)]
struct ItemRow {
    id: String, // CHAR(36)
    title: String,
    description: String,
    created_at: Option<DateTime<Utc>>,
    updated_at: DateTime<Utc>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
            item_properties: None,
        }
    }
}

#[async_trait]
impl ItemRepository for MySqlItemRepository {
    async fn get_all(&self, options: ItemQueryOptions) -> CatalogResult<Vec<Item>> {
        debug!("Finding all items, include_properties: {}", options.include_properties);

        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, title, description, created_at, updated_at
            FROM items
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        let mut items: Vec<Item> = rows.into_iter().map(Item::from).collect();

        if options.include_properties {
            let mut grouped = self.properties_by_item().await?;
            for item in &mut items {
                item.item_properties = Some(grouped.remove(&item.id).unwrap_or_default());
            }
        }

        Ok(items)
    }

    async fn get_by_id(&self, id: &str, options: ItemQueryOptions) -> CatalogResult<Item> {
        debug!("Finding item by id: {}", id);

        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, title, description, created_at, updated_at
            FROM items
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.inner())
        .await?;

        let mut item = row
            .map(Item::from)
            .ok_or_else(|| CatalogError::not_found("Item", id))?;

        if options.include_properties {
            item.item_properties = Some(self.properties_of(id).await?);
        }

        Ok(item)
    }

    async fn create(&self, item: &Item) -> CatalogResult<Item> {
        debug!("Saving new item: {}", item.id);

        // MySQL doesn't support RETURNING, so insert then select
        sqlx::query(
            r#"
            INSERT INTO items (id, title, description, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&item.id)
        .bind(&item.title)
        .bind(&item.description)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(self.pool.inner())
        .await?;

        self.get_by_id(&item.id, ItemQueryOptions::default()).await
    }

    async fn update(&self, item: &Item) -> CatalogResult<Item> {
        debug!("Updating item: {}", item.id);

        // rows_affected is 0 for unchanged rows too, so existence is checked by the re-read
        sqlx::query(
            r#"
            UPDATE items
            SET title = ?, description = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&item.title)
        .bind(&item.description)
        .bind(item.updated_at)
        .bind(&item.id)
        .execute(self.pool.inner())
        .await?;

        self.get_by_id(&item.id, ItemQueryOptions::default()).await
    }

    async fn delete(&self, id: &str) -> CatalogResult<()> {
        debug!("Deleting item: {}", id);

        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(self.pool.inner())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::not_found("Item", id));
        }
        Ok(())
    }
}

impl std::fmt::Debug for MySqlItemRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlItemRepository").finish_non_exhaustive()
    }
}
