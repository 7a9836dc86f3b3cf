//! Path id parsing.

use crate::responses::AppError;
use catalog_core::CatalogError;
use uuid::Uuid;

/// Parses a path segment as a UUID, returning it in canonical form.
pub fn parse_id(name: &str, raw: &str) -> Result<String, AppError> {
    Uuid::parse_str(raw)
        .map(|id| id.to_string())
        .map_err(|_| AppError(CatalogError::validation(format!("Invalid {name}: {raw}"))))
}
