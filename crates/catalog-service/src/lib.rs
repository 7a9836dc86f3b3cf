//! # Catalog Service
//!
//! Service layer of the Catalog API: the cache port with its Redis and
//! file backends, and the cache-aside entity services built on top of it.

pub mod cache;
pub mod dto;
#[path = "impl/mod.rs"]
pub mod service_impl;
pub mod item_property_service;
pub mod item_service;

pub use cache::*;
pub use dto::*;
pub use item_property_service::ItemPropertyService;
pub use item_service::ItemService;
pub use service_impl::{ItemPropertyServiceImpl, ItemServiceImpl};
