//! Item property controller. Every route is scoped by the owning item id.

use crate::{
    extractors::{parse_id, ValidatedJson},
    responses::{created, no_content, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use catalog_core::{ErrorResponse, ItemProperty};
use catalog_service::{CreateItemPropertyRequest, UpdateItemPropertyRequest};
use tracing::debug;
use uuid::Uuid;

/// Routes open to anonymous callers.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/items/:id/item_properties", get(list_item_properties))
        .route(
            "/items/:id/item_properties/:property_id",
            get(get_item_property),
        )
}

/// Routes that require the API token.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/items/:id/item_properties", post(create_item_property))
        .route(
            "/items/:id/item_properties/:property_id",
            put(update_item_property)
                .patch(update_item_property)
                .delete(delete_item_property),
        )
}

fn parse_ids(item_id: &str, property_id: &str) -> Result<(String, String), AppError> {
    Ok((
        parse_id("item id", item_id)?,
        parse_id("item property id", property_id)?,
    ))
}

/// List the properties of an item.
#[utoipa::path(
    get,
    path = "/items/{id}/item_properties",
    tag = "item_properties",
    params(("id" = String, Path, description = "Item ID (UUID)")),
    responses(
        (status = 200, description = "Properties of the item", body = [ItemProperty]),
        (status = 400, description = "Invalid ID", body = ErrorResponse)
    )
)]
pub async fn list_item_properties(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> ApiResult<Vec<ItemProperty>> {
    debug!("List item properties request: {}", item_id);

    let item_id = parse_id("item id", &item_id)?;
    let properties = state.item_property_service.get_all(&item_id).await?;
    ok(properties)
}

/// Create a property under an item.
#[utoipa::path(
    post,
    path = "/items/{id}/item_properties",
    tag = "item_properties",
    params(("id" = String, Path, description = "Item ID (UUID)")),
    request_body = CreateItemPropertyRequest,
    responses(
        (status = 201, description = "Property created", body = ItemProperty),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_item_property(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateItemPropertyRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ItemProperty>>), AppError> {
    debug!("Create item property request: {} ({})", request.name, item_id);

    let item_id = parse_id("item id", &item_id)?;
    let property = request.into_property(Uuid::new_v4().to_string(), item_id);
    let property = state.item_property_service.create(property).await?;
    Ok(created(property))
}

/// Get one property of an item.
#[utoipa::path(
    get,
    path = "/items/{id}/item_properties/{property_id}",
    tag = "item_properties",
    params(
        ("id" = String, Path, description = "Item ID (UUID)"),
        ("property_id" = String, Path, description = "Item property ID (UUID)")
    ),
    responses(
        (status = 200, description = "The property", body = ItemProperty),
        (status = 404, description = "Property not found", body = ErrorResponse)
    )
)]
pub async fn get_item_property(
    State(state): State<AppState>,
    Path((item_id, property_id)): Path<(String, String)>,
) -> ApiResult<ItemProperty> {
    debug!("Get item property request: {}/{}", item_id, property_id);

    let (item_id, property_id) = parse_ids(&item_id, &property_id)?;
    let property = state
        .item_property_service
        .get_by_id(&item_id, &property_id)
        .await?;
    ok(property)
}

/// Update one property of an item.
#[utoipa::path(
    put,
    path = "/items/{id}/item_properties/{property_id}",
    tag = "item_properties",
    params(
        ("id" = String, Path, description = "Item ID (UUID)"),
        ("property_id" = String, Path, description = "Item property ID (UUID)")
    ),
    request_body = UpdateItemPropertyRequest,
    responses(
        (status = 200, description = "Property updated", body = ItemProperty),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Property not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_item_property(
    State(state): State<AppState>,
    Path((item_id, property_id)): Path<(String, String)>,
    ValidatedJson(request): ValidatedJson<UpdateItemPropertyRequest>,
) -> ApiResult<ItemProperty> {
    debug!("Update item property request: {}/{}", item_id, property_id);

    let (item_id, property_id) = parse_ids(&item_id, &property_id)?;
    let property = state
        .item_property_service
        .update(request.into_property(property_id, item_id))
        .await?;
    ok(property)
}

/// Delete one property of an item.
#[utoipa::path(
    delete,
    path = "/items/{id}/item_properties/{property_id}",
    tag = "item_properties",
    params(
        ("id" = String, Path, description = "Item ID (UUID)"),
        ("property_id" = String, Path, description = "Item property ID (UUID)")
    ),
    responses(
        (status = 204, description = "Property deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Property not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_item_property(
    State(state): State<AppState>,
    Path((item_id, property_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    debug!("Delete item property request: {}/{}", item_id, property_id);

    let (item_id, property_id) = parse_ids(&item_id, &property_id)?;
    state
        .item_property_service
        .delete(&item_id, &property_id)
        .await?;
    Ok(no_content())
}
