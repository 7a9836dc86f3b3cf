//! REST API controllers.

pub mod health_controller;
pub mod item_controller;
pub mod item_property_controller;

pub use health_controller::*;
