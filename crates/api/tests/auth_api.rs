//! Integration tests for login, logout, and session cookie handling.

mod common;

use axum::http::{header, StatusCode};
use common::{body_json, post_json};
use serde_json::json;

#[tokio::test]
async fn login_with_valid_credentials_sets_session_cookie() {
    let ctx = common::build_test_app();

    let response = post_json(
        ctx.app.clone(),
        "/api/v1/auth/login",
        json!({ "username": "admin", "password": "admin123" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login must set a cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("admin_session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Max-Age=86400"));

    let json = body_json(response).await;
    assert_eq!(json["data"]["authenticated"], true);
}

#[tokio::test]
async fn login_with_wrong_password_is_401_without_cookie() {
    let ctx = common::build_test_app();

    let response = post_json(
        ctx.app.clone(),
        "/api/v1/auth/login",
        json!({ "username": "admin", "password": "wrong" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn logout_clears_the_cookie() {
    let ctx = common::build_test_app();

    let response = post_json(ctx.app.clone(), "/api/v1/auth/logout", json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("logout must clear the cookie")
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("admin_session=;"));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn forged_cookie_does_not_open_the_gate() {
    let ctx = common::build_test_app();

    // A structurally valid token signed with the wrong secret.
    let response = common::put_json_with_cookie(
        ctx.app.clone(),
        "/api/v1/prompts/1",
        json!({ "title": "Nope" }),
        "admin_session=deadbeef.1767225600.0000000000000000000000000000000000000000000000000000000000000000",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
