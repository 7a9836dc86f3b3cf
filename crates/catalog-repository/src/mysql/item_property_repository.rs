//! MySQL item property store.

use crate::{traits::ItemPropertyRepository, DatabasePoolInterface};
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult, ItemProperty};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL item property store.
#[derive(Clone)]
pub struct MySqlItemPropertyRepository {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlItemPropertyRepository {
    /// Creates a new MySQL item property store.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of an item property.
#[derive(Debug, FromRow)]
pub(crate) struct ItemPropertyRow {
    pub(crate) id: String,
    pub(crate) item_id: String,
    pub(crate) name: String,
    pub(crate) value: String,
}

impl From<ItemPropertyRow> for ItemProperty {
    fn from(row: ItemPropertyRow) -> Self {
        Self {
            id: row.id,
            item_id: row.item_id,
            name: row.name,
            value: row.value,
        }
    }
}

#[async_trait]
impl ItemPropertyRepository for MySqlItemPropertyRepository {
    async fn get_all_by_item_id(&self, item_id: &str) -> CatalogResult<Vec<ItemProperty>> {
        debug!("Finding properties of item: {}", item_id);

        let rows = sqlx::query_as::<_, ItemPropertyRow>(
            r#"
            SELECT id, item_id, name, value
            FROM item_properties
            WHERE item_id = ?
            ORDER BY name, id
            "#,
        )
        .bind(item_id)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(ItemProperty::from).collect())
    }

    async fn get_by_id(&self, item_id: &str, id: &str) -> CatalogResult<ItemProperty> {
        debug!("Finding property {} of item {}", id, item_id);

        let row = sqlx::query_as::<_, ItemPropertyRow>(
            r#"
            SELECT id, item_id, name, value
            FROM item_properties
            WHERE item_id = ? AND id = ?
            "#,
        )
        .bind(item_id)
        .bind(id)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(ItemProperty::from)
            .ok_or_else(|| CatalogError::not_found("ItemProperty", id))
    }

    async fn create(&self, property: &ItemProperty) -> CatalogResult<ItemProperty> {
        debug!("Saving new property {} for item {}", property.id, property.item_id);

        sqlx::query(
            r#"
            INSERT INTO item_properties (id, item_id, name, value)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&property.id)
        .bind(&property.item_id)
        .bind(&property.name)
        .bind(&property.value)
        .execute(self.pool.inner())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                CatalogError::not_found("Item", &property.item_id)
            }
            other => CatalogError::from(other),
        })?;

        self.get_by_id(&property.item_id, &property.id).await
    }

    async fn update(&self, property: &ItemProperty) -> CatalogResult<ItemProperty> {
        debug!("Updating property {} of item {}", property.id, property.item_id);

        sqlx::query(
            r#"
            UPDATE item_properties
            SET name = ?, value = ?
            WHERE item_id = ? AND id = ?
            "#,
        )
        .bind(&property.name)
        .bind(&property.value)
        .bind(&property.item_id)
        .bind(&property.id)
        .execute(self.pool.inner())
        .await?;

        self.get_by_id(&property.item_id, &property.id).await
    }

    async fn delete(&self, item_id: &str, id: &str) -> CatalogResult<()> {
        debug!("Deleting property {} of item {}", id, item_id);

        let result = sqlx::query("DELETE FROM item_properties WHERE item_id = ? AND id = ?")
            .bind(item_id)
            .bind(id)
            .execute(self.pool.inner())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::not_found("ItemProperty", id));
        }
        Ok(())
    }
}

impl std::fmt::Debug for MySqlItemPropertyRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlItemPropertyRepository").finish_non_exhaustive()
    }
}
