//! Read options passed explicitly down the service and repository layers.

use serde::{Deserialize, Serialize};

/// Options controlling how items are loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQueryOptions {
    /// Load each item's properties alongside it.
    pub include_properties: bool,
}

impl ItemQueryOptions {
    /// Options that also load related item properties.
    #[must_use]
    pub const fn with_properties() -> Self {
        Self {
            include_properties: true,
        }
    }

    /// Returns true if the result shape matches what is stored in the cache.
    ///
    /// Only the plain shape is cached; reads that include related
    /// properties always go to the store.
    #[must_use]
    pub const fn is_cacheable(&self) -> bool {
        !self.include_properties
    }
}
