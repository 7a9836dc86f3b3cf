//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `item_service.rs`).

mod item_property_service_impl;
mod item_service_impl;

pub use item_property_service_impl::ItemPropertyServiceImpl;
pub use item_service_impl::ItemServiceImpl;
