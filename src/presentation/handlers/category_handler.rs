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

use crate::{
    application::dto::category_query::CategoryQueryParams,
    domain::{
        repositories::category_repository::CategoryRepository,
        services::category_service::{CategoryService, CategoryServiceError},
    },
    presentation::extractors::request::ApiQuery,
};

/// 列出分类
///
/// `?count=true` 时每个分类附带文章数（没有文章的分类计为 0）
pub async fn list_categories<CR>(
    Extension(category_repo): Extension<Arc<CR>>,
    ApiQuery(params): ApiQuery<CategoryQueryParams>,
) -> impl IntoResponse
where
    CR: CategoryRepository + 'static,
{
    let service = CategoryService::new(category_repo);
    match service.list(params.with_counts()).await {
        Ok(listing) => (StatusCode::OK, Json(listing)).into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

impl From<CategoryServiceError> for (StatusCode, String) {
    fn from(err: CategoryServiceError) -> Self {
        match err {
            CategoryServiceError::StorageUnavailable(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}
