//! Shared helpers for route-level tests.
//!
//! Tests drive the real `Router` through `tower::ServiceExt::oneshot`
//! without binding a TCP listener.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use serde_json::Value;
use tower::ServiceExt;

use movies_api::app::create_app;
use movies_api::config::settings::AppConfig;
use movies_api::state::AppState;
use movies_api::store::{Document, DocumentStore, MemoryStore, StoreError, StoreResult};

/// A store whose every operation fails, for exercising the 500 paths.
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn list(&self, _collection: &str) -> StoreResult<Vec<Document>> {
        Err(StoreError::Backend("connection reset by peer".into()))
    }

    async fn create(&self, _collection: &str, _data: Value) -> StoreResult<Document> {
        Err(StoreError::Backend("connection reset by peer".into()))
    }

    async fn update_by_id(
        &self,
        _collection: &str,
        _id: &str,
        _data: Value,
    ) -> StoreResult<Option<Document>> {
        Err(StoreError::Backend("connection reset by peer".into()))
    }

    async fn delete_by_id(&self, _collection: &str, _id: &str) -> StoreResult<Option<Document>> {
        Err(StoreError::Backend("connection reset by peer".into()))
    }

    async fn find_by_field(
        &self,
        _collection: &str,
        _field: &str,
        _value: &Value,
    ) -> StoreResult<Vec<Document>> {
        Err(StoreError::Backend("connection reset by peer".into()))
    }
}

pub fn app_with_store(store: Arc<dyn DocumentStore>) -> Router {
    let config = AppConfig { server_port: 0 };
    create_app(AppState::new(config, store))
}

/// A fresh app over an empty memory store; the store handle is returned so
/// tests can seed documents and learn their ids.
pub fn test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (app_with_store(store.clone()), store)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::delete(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Request::post(uri), body).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Request::put(uri), body).await
}

async fn send_json(
    app: Router,
    builder: axum::http::request::Builder,
    body: Value,
) -> Response<Body> {
    let request = builder
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
