#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tendas_back::{
    AppState, app,
    config::{CatalogConfig, RentalConfig},
    database,
    i18n::LanguageTable,
    storage::{KeyValueStore, MemoryStorage, SqliteStorage},
};
use tower::ServiceExt;

pub const OVERRIDES_KEY: &str = "tendas.productImages";

pub fn rental_config() -> RentalConfig {
    RentalConfig {
        delay_ms: 0,
        failure_rate: 0.0,
    }
}

pub fn router_with(storage: Arc<dyn KeyValueStore>, catalog: CatalogConfig) -> Router {
    let state = AppState::from_storage(storage, &catalog, rental_config())
        .expect("default catalog is valid")
        .with_translator(Arc::new(LanguageTable));
    app::router(state)
}

pub fn memory_router() -> (Router, MemoryStorage) {
    let storage = MemoryStorage::new();
    let router = router_with(Arc::new(storage.clone()), CatalogConfig::default());
    (router, storage)
}

pub async fn sqlite_router() -> (Router, SqliteStorage) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");
    database::run_migrations(&pool).await.expect("migrate");

    let storage = SqliteStorage::new(pool);
    let router = router_with(Arc::new(storage.clone()), CatalogConfig::default());
    (router, storage)
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");

    let response = router.clone().oneshot(request).await.expect("router response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, value)
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Method::GET, uri, None).await
}

pub async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, Method::POST, uri, Some(body)).await
}

pub fn find_product(products: &Value, id: i64) -> &Value {
    products
        .as_array()
        .expect("product array")
        .iter()
        .find(|p| p["id"] == id)
        .expect("product present")
}
