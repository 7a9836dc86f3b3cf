//! Item controller.

use crate::{
    extractors::{parse_id, IncludeQuery, ValidatedJson},
    responses::{created, no_content, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use catalog_core::{ErrorResponse, Item};
use catalog_service::{CreateItemRequest, UpdateItemRequest};
use tracing::debug;
use uuid::Uuid;

/// Routes open to anonymous callers.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/:id", get(get_item))
}

/// Routes that require the API token.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route(
        "/items/:id",
        put(update_item)
            .patch(update_item)
            .delete(delete_item),
    )
}

/// List all items.
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    params(IncludeQuery),
    responses(
        (status = 200, description = "All items", body = [Item])
    )
)]
pub async fn list_items(
    State(state): State<AppState>,
    Query(include): Query<IncludeQuery>,
) -> ApiResult<Vec<Item>> {
    debug!("List items request");

    let items = state.item_service.get_all(include.options()).await?;
    ok(items)
}

/// Create a new item.
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateItemRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Item>>), AppError> {
    debug!("Create item request: {}", request.title);

    let item = request.into_item(Uuid::new_v4().to_string());
    let item = state.item_service.create(item).await?;
    Ok(created(item))
}

/// Get an item by ID.
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(("id" = String, Path, description = "Item ID (UUID)"), IncludeQuery),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(include): Query<IncludeQuery>,
) -> ApiResult<Item> {
    debug!("Get item request: {}", id);

    let id = parse_id("item id", &id)?;
    let item = state.item_service.get_by_id(&id, include.options()).await?;
    ok(item)
}

/// Update an item. The path id wins over any id in the body.
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    params(("id" = String, Path, description = "Item ID (UUID)")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateItemRequest>,
) -> ApiResult<Item> {
    debug!("Update item request: {}", id);

    let id = parse_id("item id", &id)?;
    let item = state.item_service.update(request.into_item(id)).await?;
    ok(item)
}

/// Delete an item and, through the store, its properties.
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(("id" = String, Path, description = "Item ID (UUID)")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete item request: {}", id);

    let id = parse_id("item id", &id)?;
    state.item_service.delete(&id).await?;
    Ok(no_content())
}

