//! Integration tests for the fixed category/tag catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

#[tokio::test]
async fn categories_are_listed_in_display_order() {
    let ctx = common::build_test_app();
    let response = get(ctx.app.clone(), "/api/v1/categories").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let categories = json["data"].as_array().unwrap();
    assert_eq!(categories.len(), 10);
    assert_eq!(categories[0]["slug"], "photography");

    let orders: Vec<u64> = categories
        .iter()
        .map(|c| c["order"].as_u64().unwrap())
        .collect();
    assert!(orders.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn tags_include_display_colors() {
    let ctx = common::build_test_app();
    let json = body_json(get(ctx.app.clone(), "/api/v1/tags").await).await;

    let tags = json["data"].as_array().unwrap();
    assert_eq!(tags.len(), 25);
    assert!(tags.iter().any(|t| t["slug"] == "portrait"));

    let portrait = tags.iter().find(|t| t["slug"] == "portrait").unwrap();
    assert!(portrait["color"].is_string());
}
