// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

use crate::application::dto::article_request::ArticleRequestDto;
use crate::domain::models::article::Article;
use crate::domain::repositories::article_repository::ArticleRepository;
use crate::domain::repositories::category_repository::CategoryRepository;
use crate::domain::services::article_service::ArticleService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::request::{ApiJson, ApiPath};

/// 列出全部文章
pub async fn list_articles<AR, CR>(
    Extension(article_repo): Extension<Arc<AR>>,
    Extension(category_repo): Extension<Arc<CR>>,
) -> Result<Json<Vec<Article>>, AppError>
where
    AR: ArticleRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let service = ArticleService::new(article_repo, category_repo);
    Ok(Json(service.find_all().await?))
}

/// 获取单篇文章
///
/// 文章不存在时返回 404
pub async fn get_article<AR, CR>(
    Extension(article_repo): Extension<Arc<AR>>,
    Extension(category_repo): Extension<Arc<CR>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Article>, AppError>
where
    AR: ArticleRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let service = ArticleService::new(article_repo, category_repo);
    Ok(Json(service.find_one(id).await?))
}

/// 创建文章
///
/// # 返回值
///
/// - 201：创建成功，返回完整文章
/// - 400：请求体校验失败或引用了不存在的分类
pub async fn create_article<AR, CR>(
    Extension(article_repo): Extension<Arc<AR>>,
    Extension(category_repo): Extension<Arc<CR>>,
    ApiJson(payload): ApiJson<ArticleRequestDto>,
) -> Result<(StatusCode, Json<Article>), AppError>
where
    AR: ArticleRepository + 'static,
    CR: CategoryRepository + 'static,
{
    payload.validate()?;

    let service = ArticleService::new(article_repo, category_repo);
    let article = service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

/// 整体更新文章
pub async fn update_article<AR, CR>(
    Extension(article_repo): Extension<Arc<AR>>,
    Extension(category_repo): Extension<Arc<CR>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<ArticleRequestDto>,
) -> Result<Json<Article>, AppError>
where
    AR: ArticleRepository + 'static,
    CR: CategoryRepository + 'static,
{
    payload.validate()?;

    let service = ArticleService::new(article_repo, category_repo);
    Ok(Json(service.update(id, payload.into()).await?))
}

/// 删除文章，返回被删除的文章
pub async fn delete_article<AR, CR>(
    Extension(article_repo): Extension<Arc<AR>>,
    Extension(category_repo): Extension<Arc<CR>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Article>, AppError>
where
    AR: ArticleRepository + 'static,
    CR: CategoryRepository + 'static,
{
    let service = ArticleService::new(article_repo, category_repo);
    Ok(Json(service.drop(id).await?))
}
