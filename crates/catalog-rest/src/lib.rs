//! # Catalog REST
//!
//! REST API layer using Axum for the Catalog API.
//! Provides the item and item property endpoints plus health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
