// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::article::{Article, NewArticle};
use crate::domain::repositories::article_repository::{ArticleRepository, RepositoryError};
use crate::domain::repositories::category_repository::CategoryRepository;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ArticleServiceError {
    #[error("Unknown category id: {0}")]
    UnknownCategory(i32),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 文章服务
///
/// 文章的增删改查基本直通仓库，只额外校验引用的分类是否存在
pub struct ArticleService<AR, CR> {
    article_repo: Arc<AR>,
    category_repo: Arc<CR>,
}

impl<AR, CR> ArticleService<AR, CR>
where
    AR: ArticleRepository + 'static,
    CR: CategoryRepository + 'static,
{
    pub fn new(article_repo: Arc<AR>, category_repo: Arc<CR>) -> Self {
        Self {
            article_repo,
            category_repo,
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Article>, ArticleServiceError> {
        Ok(self.article_repo.find_all().await?)
    }

    pub async fn find_one(&self, id: i32) -> Result<Article, ArticleServiceError> {
        self.article_repo
            .find_by_id(id)
            .await?
            .ok_or(ArticleServiceError::Repository(RepositoryError::NotFound))
    }

    pub async fn create(&self, article: NewArticle) -> Result<Article, ArticleServiceError> {
        let article = self.normalize(article).await?;
        let created = self.article_repo.create(&article).await?;
        info!(article_id = created.id, "Article created");
        Ok(created)
    }

    pub async fn update(&self, id: i32, article: NewArticle) -> Result<Article, ArticleServiceError> {
        let article = self.normalize(article).await?;
        let updated = self.article_repo.update(id, &article).await?;
        info!(article_id = id, "Article updated");
        Ok(updated)
    }

    /// 删除文章并返回被删除的文章
    pub async fn drop(&self, id: i32) -> Result<Article, ArticleServiceError> {
        let deleted = self.article_repo.delete(id).await?;
        info!(article_id = id, "Article deleted");
        Ok(deleted)
    }

    /// 去重分类ID并确认每个分类都存在
    async fn normalize(&self, mut article: NewArticle) -> Result<NewArticle, ArticleServiceError> {
        let mut seen = HashSet::new();
        article.category_ids.retain(|id| seen.insert(*id));

        let known: HashSet<i32> = self
            .category_repo
            .find_all()
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();

        if let Some(unknown) = article.category_ids.iter().find(|id| !known.contains(id)) {
            return Err(ArticleServiceError::UnknownCategory(*unknown));
        }

        Ok(article)
    }
}
