// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::article::{Article, NewArticle};
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

/// 文章仓库特质
///
/// 文章读取时总是连同分类与评论一起物化，
/// 调用方拿到的是完整的 `Article`，不会出现半加载状态。
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// 读取全部文章（即搜索语料），按ID升序
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<Article>)` - 全部文章
    /// * `Err(RepositoryError)` - 读取失败
    async fn find_all(&self) -> Result<Vec<Article>, RepositoryError>;

    /// 根据ID查找文章
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(Article))` - 找到文章
    /// * `Ok(None)` - 文章不存在
    /// * `Err(RepositoryError)` - 查询失败
    async fn find_by_id(&self, id: i32) -> Result<Option<Article>, RepositoryError>;

    /// 文章是否存在（不加载分类与评论）
    async fn exists(&self, id: i32) -> Result<bool, RepositoryError>;

    /// 创建文章及其分类关联
    async fn create(&self, article: &NewArticle) -> Result<Article, RepositoryError>;

    /// 整体更新文章，分类关联被替换
    ///
    /// 文章不存在时返回 `RepositoryError::NotFound`
    async fn update(&self, id: i32, article: &NewArticle) -> Result<Article, RepositoryError>;

    /// 删除文章，连同其评论和分类关联
    ///
    /// 返回删除前物化的文章，读取与删除在同一事务内完成。
    /// 文章不存在时返回 `RepositoryError::NotFound`
    async fn delete(&self, id: i32) -> Result<Article, RepositoryError>;
}
