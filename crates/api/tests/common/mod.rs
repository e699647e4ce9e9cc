#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use itemstore_api::config::ServerConfig;
use itemstore_api::router::build_app_router;
use itemstore_api::state::AppState;
use itemstore_db::{create_pool, init_schema, DbConfig, DbPool};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(database_url: String) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        app_version: "0.1.0-test".to_string(),
        database_url,
        db_max_connections: 5,
        sql_echo: false,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

/// The application router over a throwaway SQLite database.
///
/// Owns the temp directory holding the database file; it is deleted when
/// the `TestApp` drops.
pub struct TestApp {
    router: Router,
    pub pool: DbPool,
    _dir: TempDir,
}

impl TestApp {
    /// A fresh handle to the router (requests consume it).
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Build the full application router with all middleware layers, exactly
/// as `main.rs` does, backed by an empty `items` table.
pub async fn build_test_app() -> TestApp {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("items.db").display());
    let config = test_config(url);

    let pool = create_pool(&DbConfig {
        url: config.database_url.clone(),
        max_connections: config.db_max_connections,
        log_statements: false,
    })
    .await
    .expect("open sqlite pool");
    init_schema(&pool).await.expect("create items schema");

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
    };

    TestApp {
        router: build_app_router(state, &config),
        pool,
        _dir: dir,
    }
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, body).await
}

async fn json_request(app: Router, method: Method, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create an item and return its JSON representation.
pub async fn create_item(app: &TestApp, body: Value) -> Value {
    let response = post_json(app.router(), "/api/items", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
