//! Item entity.

use super::ItemProperty;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Item entity, the parent resource of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Item {
    /// Unique identifier (UUID string, assigned by the caller).
    pub id: String,

    /// Item title.
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    /// Free-form description.
    #[validate(length(max = 1000))]
    #[serde(default)]
    pub description: String,

    /// Creation timestamp, unset for rows created outside the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,

    /// Related properties, only populated when explicitly requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_properties: Option<Vec<ItemProperty>>,
}

impl Item {
    /// Creates a new item stamped with the current time.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            created_at: Some(now),
            updated_at: now,
            item_properties: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_sets_timestamps() {
        let item = Item::new("I1", "Widget", "A widget");
        assert_eq!(item.id, "I1");
        assert_eq!(item.title, "Widget");
        assert_eq!(item.created_at, Some(item.updated_at));
        assert!(item.item_properties.is_none());
    }

    #[test]
    fn test_item_validation() {
        let mut item = Item::new("I1", "", "");
        assert!(item.validate().is_err());

        item.title = "t".repeat(255);
        assert!(item.validate().is_ok());

        item.title = "t".repeat(256);
        assert!(item.validate().is_err());

        item.title = "ok".to_string();
        item.description = "d".repeat(1001);
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_serialization_omits_unloaded_properties() {
        let item = Item::new("I1", "Widget", "");
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("item_properties").is_none());

        let back: Item = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }
}
