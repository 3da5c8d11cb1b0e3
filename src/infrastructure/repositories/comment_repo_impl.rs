// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::comment::Comment;
use crate::domain::repositories::article_repository::RepositoryError;
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::infrastructure::database::entities::comment as comment_entity;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

/// 评论仓库实现
pub struct CommentRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<comment_entity::Model> for Comment {
    fn from(m: comment_entity::Model) -> Self {
        Comment {
            id: m.id,
            article_id: m.article_id,
            text: m.text,
            created_at: m.created_at.into(),
        }
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryImpl {
    async fn find_by_article(&self, article_id: i32) -> Result<Vec<Comment>, RepositoryError> {
        let models = comment_entity::Entity::find()
            .filter(comment_entity::Column::ArticleId.eq(article_id))
            .order_by_asc(comment_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn create(&self, article_id: i32, text: &str) -> Result<Comment, RepositoryError> {
        let model = comment_entity::ActiveModel {
            article_id: Set(article_id),
            text: Set(text.to_string()),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await?;

        Ok(model.into())
    }

    async fn delete(&self, article_id: i32, comment_id: i32) -> Result<(), RepositoryError> {
        let result = comment_entity::Entity::delete_many()
            .filter(comment_entity::Column::Id.eq(comment_id))
            .filter(comment_entity::Column::ArticleId.eq(article_id))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
