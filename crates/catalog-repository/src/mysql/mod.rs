//! MySQL store implementations.

mod item_property_repository;
mod item_repository;

pub use item_property_repository::*;
pub use item_repository::*;
