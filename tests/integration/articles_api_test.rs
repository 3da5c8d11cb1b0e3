// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::{json, Value};

use super::helpers::{create_test_app, LIFE, STONES_TITLE, TREES};

fn article_payload(title: &str, categories: &[i32]) -> Value {
    json!({
        "title": title,
        "announce": "Собрать камни бесконечности легко, если вы прирожденный герой.",
        "fullText": "Из под его пера вышло 8 платиновых альбомов.",
        "publishedAt": "2024-03-02T10:00:00Z",
        "categories": categories,
    })
}

#[tokio::test]
async fn list_articles_returns_seeded_corpus_in_id_order() {
    let app = create_test_app().await;

    let response = app.server.get("/api/articles").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec![STONES_TITLE, "Title", "Обзор новейшего смартфона"]);
}

#[tokio::test]
async fn get_article_by_id() {
    let app = create_test_app().await;

    let response = app
        .server
        .get(&format!("/api/articles/{}", app.article_ids[0]))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["title"], STONES_TITLE);
    assert_eq!(body["comments"][0]["articleId"], app.article_ids[0]);
}

#[tokio::test]
async fn get_missing_article_returns_404() {
    let app = create_test_app().await;

    let response = app.server.get("/api/articles/9999").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn create_article_returns_201_and_sorted_categories() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/articles")
        .json(&article_payload("Рок это протест", &[LIFE, TREES, LIFE]))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["title"], "Рок это протест");
    let category_ids: Vec<i64> = body["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(category_ids, vec![TREES as i64, LIFE as i64]);

    let search: Value = app
        .server
        .get("/api/search")
        .add_query_param("query", "протест")
        .await
        .json();
    assert_eq!(search.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_article_with_invalid_body_returns_400() {
    let app = create_test_app().await;

    let empty_title = app
        .server
        .post("/api/articles")
        .json(&article_payload("", &[TREES]))
        .await;
    let no_categories = app
        .server
        .post("/api/articles")
        .json(&article_payload("Без категорий", &[]))
        .await;

    assert_eq!(empty_title.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(no_categories.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_article_with_unknown_category_returns_400() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/articles")
        .json(&article_payload("Лучшие рок-музыканты", &[42]))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_article_replaces_fields_and_links() {
    let app = create_test_app().await;
    let id = app.article_ids[1];

    let response = app
        .server
        .put(&format!("/api/articles/{}", id))
        .json(&article_payload("Как начать программировать", &[LIFE]))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["id"], id);
    assert_eq!(body["title"], "Как начать программировать");
    assert_eq!(body["categories"], json!([{ "id": LIFE, "name": "За жизнь" }]));
}

#[tokio::test]
async fn update_missing_article_returns_404() {
    let app = create_test_app().await;

    let response = app
        .server
        .put("/api/articles/9999")
        .json(&article_payload("Как начать программировать", &[LIFE]))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_article_returns_deleted_article() {
    let app = create_test_app().await;
    let id = app.article_ids[0];

    let response = app.server.delete(&format!("/api/articles/{}", id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["title"], STONES_TITLE);

    let again = app.server.get(&format!("/api/articles/{}", id)).await;
    assert_eq!(again.status_code(), StatusCode::NOT_FOUND);

    let missing = app.server.delete(&format!("/api/articles/{}", id)).await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_article_without_title_returns_400_with_json_error() {
    let app = create_test_app().await;
    let mut payload = article_payload("Без заголовка", &[TREES]);
    payload.as_object_mut().unwrap().remove("title");

    let response = app.server.post("/api/articles").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn create_article_with_malformed_json_returns_400() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/articles")
        .bytes("{\"title\": ".into())
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn non_numeric_article_id_returns_400_with_json_error() {
    let app = create_test_app().await;

    let response = app.server.get("/api/articles/abc").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}
