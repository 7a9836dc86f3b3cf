//! Item request DTOs.

use catalog_core::Item;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new item.
///
/// The id is generated by the server; any id in the body is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateItemRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(max = 1000, message = "Description cannot exceed 1000 characters"))]
    #[serde(default)]
    pub description: String,
}

impl CreateItemRequest {
    /// Builds the entity to store under `id`.
    #[must_use]
    pub fn into_item(self, id: impl Into<String>) -> Item {
        Item::new(id, self.title, self.description)
    }
}

/// Request to replace an item's editable fields.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateItemRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(max = 1000, message = "Description cannot exceed 1000 characters"))]
    #[serde(default)]
    pub description: String,
}

impl UpdateItemRequest {
    /// Builds the entity update for the item at `id`; the path id always wins.
    #[must_use]
    pub fn into_item(self, id: impl Into<String>) -> Item {
        Item {
            id: id.into(),
            title: self.title,
            description: self.description,
            created_at: None,
            updated_at: Utc::now(),
            item_properties: None,
        }
    }
}
