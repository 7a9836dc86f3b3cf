//! Main application router.

use crate::{
    controllers::{health_controller, item_controller, item_property_controller},
    middleware::{logging_middleware, require_api_token},
    openapi::ApiDoc,
    state::AppState,
};
use axum::{
    extract::DefaultBodyLimit, http::HeaderValue, middleware, routing::get, Json, Router,
};
use catalog_config::ServerConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);

    let protected = Router::new()
        .merge(item_controller::protected_routes())
        .merge(item_property_controller::protected_routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_token,
        ));

    let api_router = Router::new()
        .merge(item_controller::public_routes())
        .merge(item_property_controller::public_routes())
        .merge(protected);

    let router = Router::new()
        // Health endpoints (no auth required)
        .merge(health_controller::router())
        // API v1
        .nest("/api/v1", api_router)
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/", get(root))
        .with_state(state)
        .layer(DefaultBodyLimit::max(server_config.max_body_size))
        .layer(TimeoutLayer::new(server_config.request_timeout()))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with REST endpoints and OpenAPI document at /api-docs/openapi.json");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }

    if server_config.cors_origins.iter().any(|origin| origin == "*") {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = server_config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Catalog API v1"
}
