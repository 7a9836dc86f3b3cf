//! Custom Axum extractors.

mod ids;
mod include;
mod validated;

pub use ids::*;
pub use include::*;
pub use validated::*;
