//! `?include=` query parameter.

use catalog_core::ItemQueryOptions;
use serde::Deserialize;
use utoipa::IntoParams;

/// Related resources to embed in item responses.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IncludeQuery {
    /// Comma separated list; `item_properties` is the only supported value.
    pub include: Option<String>,
}

impl IncludeQuery {
    /// Converts the query into repository read options.
    #[must_use]
    pub fn options(&self) -> ItemQueryOptions {
        let include_properties = self
            .include
            .as_deref()
            .is_some_and(|include| include.split(',').any(|part| part.trim() == "item_properties"));

        ItemQueryOptions { include_properties }
    }
}
