//! OpenAPI documentation configuration.

use crate::controllers::{DependencyStatus, HealthResponse, ReadinessResponse};
use catalog_core::{ErrorResponse, FieldError, Item, ItemProperty};
use catalog_service::{
    CreateItemPropertyRequest, CreateItemRequest, UpdateItemPropertyRequest, UpdateItemRequest,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// OpenAPI documentation for the Catalog API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "1.0.0",
        description = "Items and item properties with a cache-aside read path",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Item endpoints
        crate::controllers::item_controller::list_items,
        crate::controllers::item_controller::create_item,
        crate::controllers::item_controller::get_item,
        crate::controllers::item_controller::update_item,
        crate::controllers::item_controller::delete_item,
        // Item property endpoints
        crate::controllers::item_property_controller::list_item_properties,
        crate::controllers::item_property_controller::create_item_property,
        crate::controllers::item_property_controller::get_item_property,
        crate::controllers::item_property_controller::update_item_property,
        crate::controllers::item_property_controller::delete_item_property,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ErrorResponse,
            FieldError,
            Item,
            ItemProperty,
            CreateItemRequest,
            UpdateItemRequest,
            CreateItemPropertyRequest,
            UpdateItemPropertyRequest,
            HealthResponse,
            ReadinessResponse,
            DependencyStatus,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "items", description = "Item endpoints"),
        (name = "item_properties", description = "Item property endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Security addon for the static bearer token.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Static API token from `security.api_token`"))
                        .build(),
                ),
            );
        }
    }
}
