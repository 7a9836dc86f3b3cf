//! Item property request DTOs.

use catalog_core::ItemProperty;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a property under an item.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateItemPropertyRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 1000, message = "Value must be 1-1000 characters"))]
    pub value: String,
}

/// Request to replace a property's name and value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateItemPropertyRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 1000, message = "Value must be 1-1000 characters"))]
    pub value: String,
}

impl CreateItemPropertyRequest {
    /// Builds the entity; ids come from the server and the path.
    #[must_use]
    pub fn into_property(self, id: impl Into<String>, item_id: impl Into<String>) -> ItemProperty {
        ItemProperty::new(id, item_id, self.name, self.value)
    }
}

impl UpdateItemPropertyRequest {
    /// Builds the entity update; ids come from the path.
    #[must_use]
    pub fn into_property(self, id: impl Into<String>, item_id: impl Into<String>) -> ItemProperty {
        ItemProperty::new(id, item_id, self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_request_validation() {
        let ok = CreateItemPropertyRequest {
            name: "color".to_string(),
            value: "red".to_string(),
        };
        assert!(ok.validate().is_ok());

        let empty_value = UpdateItemPropertyRequest {
            name: "color".to_string(),
            value: String::new(),
        };
        assert!(empty_value.validate().is_err());
    }

    #[test]
    fn test_into_property_takes_ids_from_caller() {
        let property = CreateItemPropertyRequest {
            name: "color".to_string(),
            value: "red".to_string(),
        }
        .into_property("P1", "I1");
        assert_eq!(property.id, "P1");
        assert_eq!(property.item_id, "I1");
    }
}
