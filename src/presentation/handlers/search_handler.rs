// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::{
    application::dto::search_request::SearchQueryParams,
    config::settings::Settings,
    domain::{
        repositories::article_repository::ArticleRepository,
        search::engine::{SearchEngine, SearchQuery},
        services::search_service::{SearchService, SearchServiceError},
    },
    presentation::extractors::request::ApiQuery,
};

/// 处理搜索请求
///
/// # 参数
///
/// * `article_repo` - 文章仓库实例
/// * `settings` - 应用配置（决定参与匹配的字段）
/// * `params` - 查询参数
///
/// # 返回值
///
/// - 200：命中文章列表（含分类与评论）
/// - 400：未提供搜索词或搜索词为空
/// - 404：没有命中
/// - 500：语料读取失败
pub async fn search<AR>(
    Extension(article_repo): Extension<Arc<AR>>,
    Extension(settings): Extension<Arc<Settings>>,
    ApiQuery(params): ApiQuery<SearchQueryParams>,
) -> impl IntoResponse
where
    AR: ArticleRepository + 'static,
{
    // Rejected here so the search core never sees an empty query
    let query = match SearchQuery::parse(params.query.as_deref()) {
        Ok(query) => query,
        Err(e) => return error_response(e.into()),
    };

    let engine = SearchEngine::new(settings.search.match_fields.clone());
    let service = SearchService::new(article_repo, engine);

    match service.search(&query).await {
        Ok(articles) if articles.is_empty() => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("Nothing found for \"{}\"", query) })),
        )
            .into_response(),
        Ok(articles) => (StatusCode::OK, Json(articles)).into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(err: SearchServiceError) -> axum::response::Response {
    let (status, msg): (StatusCode, String) = err.into();
    if status.is_server_error() {
        warn!(error = %msg, "Search failed");
    }
    (status, Json(json!({ "error": msg }))).into_response()
}

impl From<SearchServiceError> for (StatusCode, String) {
    fn from(err: SearchServiceError) -> Self {
        match err {
            SearchServiceError::InvalidQuery(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            SearchServiceError::StorageUnavailable(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}
