//! Cache key generators for consistent key naming.

/// Key of a single item.
#[must_use]
pub fn item(id: &str) -> String {
    format!("item:{id}")
}

/// Key of the list of all items.
#[must_use]
pub fn items_list() -> String {
    "items:list".to_string()
}

/// Key of a single property of an item.
#[must_use]
pub fn item_property(item_id: &str, id: &str) -> String {
    format!("item_property:{item_id}:{id}")
}

/// Key of the list of all properties of an item.
#[must_use]
pub fn item_properties_list(item_id: &str) -> String {
    format!("item_properties:list:{item_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_keys() {
        assert_eq!(item("I1"), "item:I1");
        assert_eq!(items_list(), "items:list");
    }

    #[test]
    fn test_property_keys() {
        assert_eq!(item_property("I1", "P1"), "item_property:I1:P1");
        assert_eq!(item_properties_list("I1"), "item_properties:list:I1");
    }

    #[test]
    fn test_property_lists_are_per_item() {
        assert_ne!(item_properties_list("X"), item_properties_list("Y"));
    }
}
