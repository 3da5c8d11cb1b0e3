// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::article_repository::RepositoryError;
use crate::domain::models::comment::Comment;
use async_trait::async_trait;

/// 评论仓库特质
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// 读取文章下的全部评论，按ID升序
    async fn find_by_article(&self, article_id: i32) -> Result<Vec<Comment>, RepositoryError>;

    /// 为文章创建评论
    ///
    /// # 参数
    ///
    /// * `article_id` - 文章ID
    /// * `text` - 评论内容
    async fn create(&self, article_id: i32, text: &str) -> Result<Comment, RepositoryError>;

    /// 删除文章下的某条评论
    ///
    /// 评论不存在或不属于该文章时返回 `RepositoryError::NotFound`
    async fn delete(&self, article_id: i32, comment_id: i32) -> Result<(), RepositoryError>;
}
