//! # Catalog Domain
//!
//! Domain entities and query options for the Catalog API.

pub mod entities;
pub mod query;

pub use entities::*;
pub use query::*;
