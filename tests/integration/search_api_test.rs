// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::Value;
use typoteka::config::settings::SearchSettings;
use typoteka::domain::search::engine::MatchField;

use super::helpers::{create_test_app, create_test_app_with_search, STONES_TITLE};

#[tokio::test]
async fn search_returns_matching_article_with_relations() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/api/search")
        .add_query_param("query", "Как собрать камни")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let articles = body.as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["title"], STONES_TITLE);
    assert_eq!(articles[0]["categories"][0]["name"], "Деревья");
    assert_eq!(articles[0]["comments"].as_array().unwrap().len(), 1);
    assert!(articles[0]["fullText"].is_string());
    assert!(articles[0]["publishedAt"].is_string());
}

#[tokio::test]
async fn search_is_case_insensitive_for_cyrillic() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/api/search")
        .add_query_param("query", "КАМНИ")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn search_without_matches_returns_404() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/api/search")
        .add_query_param("query", "Продам свою душу")
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn search_without_query_returns_400() {
    let app = create_test_app().await;

    let response = app.server.get("/api/search").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_with_blank_query_returns_400() {
    let app = create_test_app().await;

    let empty = app
        .server
        .get("/api/search")
        .add_query_param("query", "")
        .await;
    let blank = app
        .server
        .get("/api/search")
        .add_query_param("query", "   ")
        .await;

    assert_eq!(empty.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(blank.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_ignores_announce_by_default() {
    let app = create_test_app().await;

    // Only the seeded announces contain this word
    let response = app
        .server
        .get("/api/search")
        .add_query_param("query", "анонс")
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_covers_configured_fields() {
    let app = create_test_app_with_search(SearchSettings {
        match_fields: vec![MatchField::Title, MatchField::Announce],
    })
    .await;

    let response = app
        .server
        .get("/api/search")
        .add_query_param("query", "анонс")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect();
    let expected: Vec<i64> = app.article_ids.iter().map(|id| *id as i64).collect();
    assert_eq!(ids, expected);
}
