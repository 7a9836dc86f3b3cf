//! Result type aliases for the Catalog API.

use crate::CatalogError;

/// A specialized `Result` type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
