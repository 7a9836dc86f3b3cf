//! Item property entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A named value attached to exactly one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ItemProperty {
    /// Unique identifier (UUID string, assigned by the caller).
    pub id: String,

    /// Owning item.
    pub item_id: String,

    /// Property name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Property value.
    #[validate(length(min = 1, max = 1000))]
    pub value: String,
}

impl ItemProperty {
    /// Creates a new property under the given item.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        item_id: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            item_id: item_id.into(),
            name: name.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_validation() {
        let property = ItemProperty::new("P1", "I1", "color", "red");
        assert!(property.validate().is_ok());

        let empty_name = ItemProperty::new("P1", "I1", "", "red");
        assert!(empty_name.validate().is_err());

        let empty_value = ItemProperty::new("P1", "I1", "color", "");
        assert!(empty_value.validate().is_err());

        let long_value = ItemProperty::new("P1", "I1", "color", "v".repeat(1001));
        assert!(long_value.validate().is_err());
    }
}
