#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use typewriter_api::router::build_app_router;
use typewriter_api::config::{LogFormat, ServerConfig};
use typewriter_api::services::{ActivityService, ScoreService, TextService, UserService};
use typewriter_api::state::AppState;
use typewriter_core::password::Argon2Hasher;
use typewriter_db::repositories::InMemoryRepository;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "postgres://localhost/typewriter_test".to_string(),
        db_max_connections: 1,
        log_format: LogFormat::Text,
    }
}

/// State backed by in-memory repositories.
///
/// The pool is created lazily and only the health check touches it, so no
/// database is needed unless one happens to be listening.
pub fn test_state() -> AppState {
    let config = test_config();
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy(&config.database_url)
        .expect("test database URL should parse");

    AppState {
        pool,
        config: Arc::new(config),
        users: Arc::new(UserService::new(
            Arc::new(InMemoryRepository::new()),
            Arc::new(Argon2Hasher),
        )),
        texts: Arc::new(TextService::new(Arc::new(InMemoryRepository::new()))),
        activities: Arc::new(ActivityService::new(Arc::new(InMemoryRepository::new()))),
        scores: Arc::new(ScoreService::new(Arc::new(InMemoryRepository::new()))),
    }
}

/// The full router with all middleware layers. Clone it per request; the
/// clones share one set of in-memory tables.
pub fn build_test_app() -> Router {
    build_app_router(test_state(), &test_config())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
