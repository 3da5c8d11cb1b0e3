// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::article_repository::RepositoryError;
use crate::domain::models::category::{ArticleCategoryLink, Category};
use async_trait::async_trait;

/// 分类仓库特质
///
/// 只提供读取：分类表和分类-文章关联表。计数由领域层自行分组计算。
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// 读取全部分类，按ID升序
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;

    /// 读取全部分类-文章关联
    async fn find_links(&self) -> Result<Vec<ArticleCategoryLink>, RepositoryError>;
}
