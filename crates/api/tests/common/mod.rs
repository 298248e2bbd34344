#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use cms_api::app::build_app;
use cms_api::config::{LogFormat, ServerConfig};
use cms_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. The database URL is unused because the
/// pool comes from `#[sqlx::test]`.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "postgres://unused".to_string(),
        database_max_connections: 5,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router, with every middleware layer, on top
/// of the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

/// Send a `GET` request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a `POST` request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST to an RPC mutation and return the `data` payload of a successful
/// response.
pub async fn call(pool: &PgPool, operation: &str, input: serde_json::Value) -> serde_json::Value {
    let app = build_test_app(pool.clone());
    let response = post_json(app, &format!("/rpc/{operation}"), input).await;
    assert!(
        response.status().is_success(),
        "{operation} failed with {}",
        response.status()
    );
    body_json(response).await["data"].take()
}

/// GET an RPC query and return the `data` payload of a successful response.
pub async fn query(pool: &PgPool, path: &str) -> serde_json::Value {
    let app = build_test_app(pool.clone());
    let response = get(app, &format!("/rpc/{path}")).await;
    assert!(
        response.status().is_success(),
        "{path} failed with {}",
        response.status()
    );
    body_json(response).await["data"].take()
}
