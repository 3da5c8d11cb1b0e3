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

use crate::domain::models::article::{Article, NewArticle};
use crate::domain::models::category::Category;
use crate::domain::models::comment::Comment;
use crate::domain::repositories::article_repository::{ArticleRepository, RepositoryError};
use crate::infrastructure::database::entities::{
    article as article_entity, article_category as link_entity, category as category_entity,
    comment as comment_entity,
};
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 文章仓库实现
pub struct ArticleRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl ArticleRepositoryImpl {
    /// 创建新的文章仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load_one(&self, id: i32) -> Result<Article, RepositoryError> {
        let model = article_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        materialize(self.db.as_ref(), vec![model])
            .await?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }
}

/// 为一批文章行批量加载分类与评论，各自一次查询
async fn materialize<C: ConnectionTrait>(
    db: &C,
    models: Vec<article_entity::Model>,
) -> Result<Vec<Article>, RepositoryError> {
    let categories = models
        .load_many_to_many(category_entity::Entity, link_entity::Entity, db)
        .await?;
    let comments = models
        .load_many(
            comment_entity::Entity::find().order_by_asc(comment_entity::Column::Id),
            db,
        )
        .await?;

    Ok(models
        .into_iter()
        .zip(categories)
        .zip(comments)
        .map(|((m, categories), comments)| to_domain(m, categories, comments))
        .collect())
}

fn to_domain(
    m: article_entity::Model,
    categories: Vec<category_entity::Model>,
    comments: Vec<comment_entity::Model>,
) -> Article {
    let mut categories: Vec<Category> = categories
        .into_iter()
        .map(|c| Category {
            id: c.id,
            name: c.name,
        })
        .collect();
    categories.sort_by_key(|c| c.id);

    Article {
        id: m.id,
        title: m.title,
        announce: m.announce,
        full_text: m.full_text,
        picture: m.picture,
        published_at: m.published_at.into(),
        categories,
        comments: comments
            .into_iter()
            .map(|c| Comment {
                id: c.id,
                article_id: c.article_id,
                text: c.text,
                created_at: c.created_at.into(),
            })
            .collect(),
    }
}

async fn insert_links<C: ConnectionTrait>(
    db: &C,
    article_id: i32,
    category_ids: &[i32],
) -> Result<(), DbErr> {
    if category_ids.is_empty() {
        return Ok(());
    }

    let links = category_ids.iter().map(|category_id| link_entity::ActiveModel {
        article_id: Set(article_id),
        category_id: Set(*category_id),
    });
    link_entity::Entity::insert_many(links)
        .exec_without_returning(db)
        .await?;
    Ok(())
}

#[async_trait]
impl ArticleRepository for ArticleRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Article>, RepositoryError> {
        let models = article_entity::Entity::find()
            .order_by_asc(article_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        materialize(self.db.as_ref(), models).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Article>, RepositoryError> {
        match self.load_one(id).await {
            Ok(article) => Ok(Some(article)),
            Err(RepositoryError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        let count = article_entity::Entity::find_by_id(id)
            .count(self.db.as_ref())
            .await?;
        Ok(count > 0)
    }

    async fn create(&self, article: &NewArticle) -> Result<Article, RepositoryError> {
        let txn = self.db.begin().await?;

        let model = article_entity::ActiveModel {
            title: Set(article.title.clone()),
            announce: Set(article.announce.clone()),
            full_text: Set(article.full_text.clone()),
            picture: Set(article.picture.clone()),
            published_at: Set(article.published_at.into()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        insert_links(&txn, model.id, &article.category_ids).await?;

        txn.commit().await?;
        self.load_one(model.id).await
    }

    async fn update(&self, id: i32, article: &NewArticle) -> Result<Article, RepositoryError> {
        let txn = self.db.begin().await?;

        let mut model: article_entity::ActiveModel = article_entity::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into();

        model.title = Set(article.title.clone());
        model.announce = Set(article.announce.clone());
        model.full_text = Set(article.full_text.clone());
        model.picture = Set(article.picture.clone());
        model.published_at = Set(article.published_at.into());
        model.update(&txn).await?;

        link_entity::Entity::delete_many()
            .filter(link_entity::Column::ArticleId.eq(id))
            .exec(&txn)
            .await?;
        insert_links(&txn, id, &article.category_ids).await?;

        txn.commit().await?;
        self.load_one(id).await
    }

    async fn delete(&self, id: i32) -> Result<Article, RepositoryError> {
        let txn = self.db.begin().await?;

        // Dropping the transaction on an early return rolls it back
        let model = article_entity::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        let article = materialize(&txn, vec![model])
            .await?
            .pop()
            .ok_or(RepositoryError::NotFound)?;

        comment_entity::Entity::delete_many()
            .filter(comment_entity::Column::ArticleId.eq(id))
            .exec(&txn)
            .await?;
        link_entity::Entity::delete_many()
            .filter(link_entity::Column::ArticleId.eq(id))
            .exec(&txn)
            .await?;
        article_entity::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(article)
    }
}
