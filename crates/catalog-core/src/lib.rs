//! # Catalog Core
//!
//! Core types, domain entities, and error definitions for the Catalog API.
//! Every other crate in the workspace builds on the types defined here.

pub mod domain;
pub mod error;
pub mod result;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use result::*;
pub use validation::*;
