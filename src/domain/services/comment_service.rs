// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::comment::Comment;
use crate::domain::repositories::article_repository::{ArticleRepository, RepositoryError};
use crate::domain::repositories::comment_repository::CommentRepository;
use std::sync::Arc;
use tracing::info;

/// 评论服务
///
/// 所有操作先确认文章存在，文章不存在时返回 `RepositoryError::NotFound`
pub struct CommentService<CMR, AR> {
    comment_repo: Arc<CMR>,
    article_repo: Arc<AR>,
}

impl<CMR, AR> CommentService<CMR, AR>
where
    CMR: CommentRepository + 'static,
    AR: ArticleRepository + 'static,
{
    pub fn new(comment_repo: Arc<CMR>, article_repo: Arc<AR>) -> Self {
        Self {
            comment_repo,
            article_repo,
        }
    }

    pub async fn find_all(&self, article_id: i32) -> Result<Vec<Comment>, RepositoryError> {
        self.ensure_article(article_id).await?;
        self.comment_repo.find_by_article(article_id).await
    }

    pub async fn create(&self, article_id: i32, text: &str) -> Result<Comment, RepositoryError> {
        self.ensure_article(article_id).await?;
        let comment = self.comment_repo.create(article_id, text).await?;
        info!(article_id, comment_id = comment.id, "Comment created");
        Ok(comment)
    }

    pub async fn drop(&self, article_id: i32, comment_id: i32) -> Result<(), RepositoryError> {
        self.ensure_article(article_id).await?;
        self.comment_repo.delete(article_id, comment_id).await?;
        info!(article_id, comment_id, "Comment deleted");
        Ok(())
    }

    async fn ensure_article(&self, article_id: i32) -> Result<(), RepositoryError> {
        if self.article_repo.exists(article_id).await? {
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }
}
