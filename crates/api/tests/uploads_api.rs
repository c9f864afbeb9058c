//! Integration tests for the gated image upload endpoint.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{body_json, get, login};
use tower::ServiceExt;

const BOUNDARY: &str = "gallery-test-boundary";

fn multipart_request(uri: &str, cookie: Option<&str>, filename: &str, content: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body)).unwrap()
}

#[tokio::test]
async fn upload_without_session_is_401() {
    let ctx = common::build_test_app();

    let request = multipart_request("/api/v1/uploads", None, "pic.png", b"not-really-a-png");
    let response = ctx.app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn upload_stores_file_under_a_fresh_name_and_serves_it_back() {
    let ctx = common::build_test_app();
    let cookie = login(ctx.app.clone()).await;

    let request = multipart_request(
        "/api/v1/uploads",
        Some(&cookie),
        "pic.png",
        b"not-really-a-png",
    );
    let response = ctx.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let url = json["data"]["url"].as_str().unwrap().to_string();
    assert!(url.starts_with("/uploads/"));
    assert!(url.ends_with(".png"));
    assert!(!url.ends_with("pic.png"), "filename must be regenerated");

    // The static file layer serves what was just written.
    let served = get(ctx.app.clone(), &url).await;
    assert_eq!(served.status(), StatusCode::OK);
}

#[tokio::test]
async fn upload_without_file_field_is_400() {
    let ctx = common::build_test_app();
    let cookie = login(ctx.app.clone()).await;

    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{BOUNDARY}--\r\n"
        )
        .as_bytes(),
    );
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/uploads")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(header::COOKIE, &cookie)
        .body(Body::from(body))
        .unwrap();

    let response = ctx.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
