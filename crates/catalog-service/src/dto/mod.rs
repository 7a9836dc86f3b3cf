//! Data Transfer Objects (DTOs).

mod item_dto;
mod item_property_dto;

pub use item_dto::*;
pub use item_property_dto::*;
