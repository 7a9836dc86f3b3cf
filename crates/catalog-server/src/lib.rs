//! # Catalog Server Library
//!
//! Wiring, logging and startup helpers for the Catalog API binary.

pub mod di;
pub mod startup;
pub mod telemetry;
