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

use crate::domain::models::category::{ArticleCategoryLink, Category};
use crate::domain::repositories::article_repository::RepositoryError;
use crate::domain::repositories::category_repository::CategoryRepository;
use crate::infrastructure::database::entities::{
    article_category as link_entity, category as category_entity,
};
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 分类仓库实现
pub struct CategoryRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl CategoryRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let models = category_entity::Entity::find()
            .order_by_asc(category_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models
            .into_iter()
            .map(|m| Category {
                id: m.id,
                name: m.name,
            })
            .collect())
    }

    async fn find_links(&self) -> Result<Vec<ArticleCategoryLink>, RepositoryError> {
        let models = link_entity::Entity::find()
            .order_by_asc(link_entity::Column::CategoryId)
            .order_by_asc(link_entity::Column::ArticleId)
            .all(self.db.as_ref())
            .await?;

        Ok(models
            .into_iter()
            .map(|m| ArticleCategoryLink {
                category_id: m.category_id,
                article_id: m.article_id,
            })
            .collect())
    }
}
