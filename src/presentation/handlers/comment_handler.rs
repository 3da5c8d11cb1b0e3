// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, http::StatusCode, Json};
use serde_json::{json, Value};
use std::sync::Arc;
use validator::Validate;

use crate::application::dto::comment_request::CommentRequestDto;
use crate::domain::models::comment::Comment;
use crate::domain::repositories::article_repository::ArticleRepository;
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::services::comment_service::CommentService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::request::{ApiJson, ApiPath};

/// 列出文章的评论
pub async fn list_comments<CMR, AR>(
    Extension(comment_repo): Extension<Arc<CMR>>,
    Extension(article_repo): Extension<Arc<AR>>,
    ApiPath(article_id): ApiPath<i32>,
) -> Result<Json<Vec<Comment>>, AppError>
where
    CMR: CommentRepository + 'static,
    AR: ArticleRepository + 'static,
{
    let service = CommentService::new(comment_repo, article_repo);
    Ok(Json(service.find_all(article_id).await?))
}

/// 为文章添加评论
pub async fn create_comment<CMR, AR>(
    Extension(comment_repo): Extension<Arc<CMR>>,
    Extension(article_repo): Extension<Arc<AR>>,
    ApiPath(article_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<CommentRequestDto>,
) -> Result<(StatusCode, Json<Comment>), AppError>
where
    CMR: CommentRepository + 'static,
    AR: ArticleRepository + 'static,
{
    payload.validate()?;

    let service = CommentService::new(comment_repo, article_repo);
    let comment = service.create(article_id, &payload.text).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// 删除评论
pub async fn delete_comment<CMR, AR>(
    Extension(comment_repo): Extension<Arc<CMR>>,
    Extension(article_repo): Extension<Arc<AR>>,
    ApiPath((article_id, comment_id)): ApiPath<(i32, i32)>,
) -> Result<Json<Value>, AppError>
where
    CMR: CommentRepository + 'static,
    AR: ArticleRepository + 'static,
{
    let service = CommentService::new(comment_repo, article_repo);
    service.drop(article_id, comment_id).await?;
    Ok(Json(json!({ "id": comment_id, "articleId": article_id })))
}
