//! Shared harness for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as
//! production) and sends requests through `tower::ServiceExt` without
//! a TCP listener.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use recetario_api::config::ServerConfig;
use recetario_api::gate::IDENTITY_HEADER;
use recetario_api::router::build_app_router;
use recetario_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Every path is public so most tests need no identity header; the
/// gate tests pass their own restricted config.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        public_paths: vec!["/".to_string(), "/health".to_string(), "/api/*".to_string()],
    }
}

/// Build the full application router with the default test config.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

/// Build the full application router with a custom config.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery, access gate) that production uses.
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// GET with the identity header the upstream gate would attach.
pub async fn get_as(app: Router, uri: &str, username: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header(IDENTITY_HEADER, username)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a category through the API and return its id.
pub async fn seed_category(pool: &PgPool, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/categories/create",
        serde_json::json!({ "name": name }),
    )
    .await;
    let json = body_json(response).await;
    json["id"].as_i64().expect("seed category id")
}

/// A valid recipe create payload with one ingredient, one video, and
/// one image.
pub fn recipe_payload(title: &str, category_id: i64) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "A test recipe",
        "body": "Mix everything and bake.",
        "prep_time_minutes": 45,
        "difficulty": "easy",
        "published_at": chrono::Utc::now().to_rfc3339(),
        "category_id": category_id,
        "ingredients": [
            { "name": "milk", "quantity": 2.0, "unit": "liter" }
        ],
        "videos": [
            { "title": "How-to", "url": "https://videos.example/howto", "duration_secs": 120 }
        ],
        "images": [
            { "url": "https://images.example/cover.jpg" }
        ]
    })
}
