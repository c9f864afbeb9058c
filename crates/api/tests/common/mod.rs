//! Shared helpers for the API integration tests.
//!
//! Each test context gets its own temp directory for the store document and
//! uploads, so tests can run in parallel. Stats default to degraded mode;
//! use [`build_test_app_with_stats`] to plug in an in-memory backend.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use gallery_api::config::{AdminConfig, ServerConfig, SessionConfig};
use gallery_api::router::build_app_router;
use gallery_api::state::AppState;
use gallery_stats::StatsClient;
use gallery_store::PromptStore;

/// A router plus the temp directory backing it. The directory is removed
/// when the context drops.
pub struct TestContext {
    pub app: Router,
    pub dir: PathBuf,
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

/// Build a test `ServerConfig` rooted in the given temp directory.
pub fn test_config(dir: &PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        data_file: dir.join("prompts.json"),
        upload_dir: dir.join("uploads"),
        admin: AdminConfig {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        },
        session: SessionConfig {
            secret: "test-session-secret".to_string(),
            ttl_hours: 24,
        },
    }
}

/// Build the full application router with degraded (unconfigured) stats.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app() -> TestContext {
    build_test_app_with_stats(StatsClient::disabled())
}

/// Build the application router with the given stats client.
pub fn build_test_app_with_stats(stats: StatsClient) -> TestContext {
    let dir = std::env::temp_dir().join(format!("gallery-api-test-{}", Uuid::new_v4()));
    let config = test_config(&dir);

    let state = AppState {
        store: Arc::new(PromptStore::open(config.data_file.clone())),
        stats,
        config: Arc::new(config.clone()),
    };

    TestContext {
        app: build_app_router(state, &config),
        dir,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

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

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body, None).await
}

pub async fn post_json_with_cookie(
    app: Router,
    uri: &str,
    body: Value,
    cookie: &str,
) -> Response<Body> {
    send_json(app, Method::POST, uri, body, Some(cookie)).await
}

pub async fn put_json_with_cookie(
    app: Router,
    uri: &str,
    body: Value,
    cookie: &str,
) -> Response<Body> {
    send_json(app, Method::PUT, uri, body, Some(cookie)).await
}

pub async fn delete_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: Value,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Log in with the test credentials and return the `admin_session=<token>`
/// cookie pair for subsequent requests.
pub async fn login(app: Router) -> String {
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "username": "admin", "password": "admin123" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK, "test login must succeed");

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login must set a session cookie")
        .to_str()
        .unwrap();

    set_cookie
        .split(';')
        .next()
        .expect("cookie header has a name=value part")
        .to_string()
}
