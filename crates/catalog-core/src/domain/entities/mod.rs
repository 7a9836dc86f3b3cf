//! Domain entities.

mod item;
mod item_property;

pub use item::*;
pub use item_property::*;
