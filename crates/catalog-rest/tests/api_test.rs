//! Router tests against in-memory stores and a file cache.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use catalog_config::ServerConfig;
use catalog_core::{CatalogError, CatalogResult};
use catalog_repository::{
    memory::{in_memory_stores, InMemoryItemRepository},
    DatabaseHealthCheck,
};
use catalog_rest::{create_router, AppState};
use catalog_service::{FileCache, ItemPropertyServiceImpl, ItemServiceImpl};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

const TOKEN: &str = "test-token";

struct FakeDatabase {
    healthy: bool,
}

#[async_trait]
impl DatabaseHealthCheck for FakeDatabase {
    async fn health_check(&self) -> CatalogResult<()> {
        if self.healthy {
            Ok(())
        } else {
            Err(CatalogError::database("connection refused"))
        }
    }
}

struct TestApp {
    router: Router,
    items: Arc<InMemoryItemRepository>,
    _dir: TempDir,
}

async fn test_app_with_database(healthy: bool) -> TestApp {
    let dir = TempDir::new().unwrap();
    let cache = Arc::new(FileCache::open(dir.path()).await.unwrap());
    let (items, properties) = in_memory_stores();

    let state = AppState::new(
        Arc::new(ItemServiceImpl::new(items.clone(), cache.clone())),
        Arc::new(ItemPropertyServiceImpl::new(properties, cache.clone())),
        cache,
        Arc::new(FakeDatabase { healthy }),
        TOKEN,
    );

    TestApp {
        router: create_router(state, &ServerConfig::default()),
        items,
        _dir: dir,
    }
}

async fn test_app() -> TestApp {
    test_app_with_database(true).await
}

impl TestApp {
    async fn send(&self, method: Method, uri: &str, body: Option<Value>, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn create_item(&self, title: &str) -> String {
        let (status, body) = self
            .send(Method::POST, "/api/v1/items", Some(json!({"title": title})), None)
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"]["id"].as_str().unwrap().to_string()
    }

    async fn create_property(&self, item_id: &str, name: &str, value: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                &format!("/api/v1/items/{item_id}/item_properties"),
                Some(json!({"name": name, "value": value})),
                Some(TOKEN),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"]["id"].as_str().unwrap().to_string()
    }
}

#[tokio::test]
async fn test_health_endpoints_respond() {
    let app = test_app().await;

    let (status, body) = app.send(Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, _) = app.send(Method::GET, "/live", None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_reports_wired_cache_backend() {
    let app = test_app().await;
    let (status, body) = app.send(Method::GET, "/ready", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["cache_backend"], "file");
    assert_eq!(body["cache"]["healthy"], true);
}

#[tokio::test]
async fn test_readiness_fails_when_database_is_down() {
    let app = test_app_with_database(false).await;
    let (status, body) = app.send(Method::GET, "/ready", None, None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["database"]["healthy"], false);
}

#[tokio::test]
async fn test_create_and_get_item() {
    let app = test_app().await;
    let id = app.create_item("Widget").await;

    let (status, body) = app
        .send(Method::GET, &format!("/api/v1/items/{id}"), None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["title"], "Widget");
    assert!(body["data"]["created_at"].is_string());

    let (status, body) = app.send(Method::GET, "/api/v1/items", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_repeated_reads_hit_the_store_once() {
    let app = test_app().await;
    let id = app.create_item("Widget").await;

    for _ in 0..3 {
        let (status, _) = app
            .send(Method::GET, &format!("/api/v1/items/{id}"), None, None)
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    assert_eq!(app.items.probe().reads(), 1);
}

#[tokio::test]
async fn test_invalid_item_is_rejected_with_field_errors() {
    let app = test_app().await;
    let (status, body) = app
        .send(Method::POST, "/api/v1/items", Some(json!({"title": ""})), None)
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["details"][0]["field"], "title");
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let app = test_app().await;
    let (status, body) = app.send(Method::GET, "/api/v1/items/nope", None, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_item_is_not_found() {
    let app = test_app().await;
    let uri = "/api/v1/items/00000000-0000-4000-8000-000000000000";
    let (status, body) = app.send(Method::GET, uri, None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_writes_require_the_api_token() {
    let app = test_app().await;
    let id = app.create_item("Widget").await;
    let uri = format!("/api/v1/items/{id}");
    let update = json!({"title": "Widget2"});

    let (status, body) = app.send(Method::PUT, &uri, Some(update.clone()), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    let (status, _) = app.send(Method::DELETE, &uri, None, Some("wrong")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.send(Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_is_visible_on_next_read() {
    let app = test_app().await;
    let id = app.create_item("Widget").await;
    let uri = format!("/api/v1/items/{id}");

    let (_, body) = app.send(Method::GET, &uri, None, None).await;
    assert_eq!(body["data"]["title"], "Widget");

    let (status, body) = app
        .send(
            Method::PATCH,
            &uri,
            Some(json!({"id": "ignored", "title": "Widget2"})),
            Some(TOKEN),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id.as_str());

    let (_, body) = app.send(Method::GET, &uri, None, None).await;
    assert_eq!(body["data"]["title"], "Widget2");
}

#[tokio::test]
async fn test_delete_item_then_not_found() {
    let app = test_app().await;
    let id = app.create_item("Widget").await;
    let uri = format!("/api/v1/items/{id}");
    app.send(Method::GET, &uri, None, None).await;

    let (status, body) = app.send(Method::DELETE, &uri, None, Some(TOKEN)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = app.send(Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_property_lifecycle() {
    let app = test_app().await;
    let item_id = app.create_item("Widget").await;
    let property_id = app.create_property(&item_id, "color", "red").await;
    let list_uri = format!("/api/v1/items/{item_id}/item_properties");
    let uri = format!("{list_uri}/{property_id}");

    let (status, body) = app.send(Method::GET, &list_uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["name"], "color");

    let (status, body) = app
        .send(
            Method::PUT,
            &uri,
            Some(json!({"name": "color", "value": "blue"})),
            Some(TOKEN),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["item_id"], item_id.as_str());

    let (_, body) = app.send(Method::GET, &uri, None, None).await;
    assert_eq!(body["data"]["value"], "blue");

    let (status, _) = app.send(Method::DELETE, &uri, None, Some(TOKEN)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app.send(Method::GET, &list_uri, None, None).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_property_writes_require_the_api_token() {
    let app = test_app().await;
    let item_id = app.create_item("Widget").await;

    let (status, _) = app
        .send(
            Method::POST,
            &format!("/api/v1/items/{item_id}/item_properties"),
            Some(json!({"name": "color", "value": "red"})),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_property_under_missing_item_is_not_found() {
    let app = test_app().await;
    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/items/00000000-0000-4000-8000-000000000000/item_properties",
            Some(json!({"name": "color", "value": "red"})),
            Some(TOKEN),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_include_embeds_properties() {
    let app = test_app().await;
    let item_id = app.create_item("Widget").await;
    app.create_property(&item_id, "color", "red").await;

    let (_, body) = app
        .send(Method::GET, &format!("/api/v1/items/{item_id}"), None, None)
        .await;
    assert!(body["data"].get("item_properties").is_none());

    let (status, body) = app
        .send(
            Method::GET,
            &format!("/api/v1/items/{item_id}?include=item_properties"),
            None,
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["item_properties"][0]["value"], "red");

    let (_, body) = app
        .send(Method::GET, "/api/v1/items?include=item_properties", None, None)
        .await;
    assert_eq!(body["data"][0]["item_properties"][0]["name"], "color");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_app().await;
    let (status, body) = app.send(Method::GET, "/api-docs/openapi.json", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Catalog API");
}
