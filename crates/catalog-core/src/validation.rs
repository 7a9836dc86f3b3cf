//! Validation utilities.

use crate::{CatalogError, FieldError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `CatalogError` on failure.
    fn validate_request(&self) -> Result<(), CatalogError> {
        self.validate().map_err(validation_errors_to_catalog_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Flattens `validator::ValidationErrors` into field errors.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string),
                code: error.code.to_string(),
            })
        })
        .collect();
    // HashMap order is unstable
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

/// Converts `validator::ValidationErrors` to `CatalogError`.
#[must_use]
pub fn validation_errors_to_catalog_error(errors: ValidationErrors) -> CatalogError {
    let message = field_errors(&errors)
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    CatalogError::Validation(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Item;

    #[test]
    fn test_validate_request_reports_fields() {
        let item = Item::new("I1", "", "d".repeat(1001));
        let err = item.validate_request().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        let message = err.to_string();
        assert!(message.contains("title"));
        assert!(message.contains("description"));
    }

    #[test]
    fn test_field_errors_sorted() {
        let item = Item::new("I1", "", "d".repeat(1001));
        let errors = item.validate().unwrap_err();
        let fields = field_errors(&errors);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field, "description");
        assert_eq!(fields[1].field, "title");
    }
}
