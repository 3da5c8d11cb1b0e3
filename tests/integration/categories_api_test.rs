// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::{json, Value};

use super::helpers::create_test_app;

#[tokio::test]
async fn list_categories_without_counts() {
    let app = create_test_app().await;

    let response = app.server.get("/api/categories").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "Деревья" },
            { "id": 2, "name": "За жизнь" },
            { "id": 3, "name": "Без статей" }
        ])
    );
}

#[tokio::test]
async fn list_categories_with_counts_includes_empty_categories() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/api/categories")
        .add_query_param("count", "true")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "Деревья", "count": 2 },
            { "id": 2, "name": "За жизнь", "count": 1 },
            { "id": 3, "name": "Без статей", "count": 0 }
        ])
    );
}

#[tokio::test]
async fn count_false_returns_plain_listing() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/api/categories")
        .add_query_param("count", "false")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body[0].get("count").is_none());
}

#[tokio::test]
async fn counts_follow_article_deletion() {
    let app = create_test_app().await;

    app.server
        .delete(&format!("/api/articles/{}", app.article_ids[0]))
        .await
        .assert_status_ok();

    let body: Value = app
        .server
        .get("/api/categories")
        .add_query_param("count", "true")
        .await
        .json();
    assert_eq!(body[0]["count"], 1);
}

#[tokio::test]
async fn non_boolean_count_returns_400_with_json_error() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/api/categories")
        .add_query_param("count", "yes")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}
