// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::category::{ArticleCategoryLink, Category, CategoryCount, CategoryListing};
use crate::domain::repositories::article_repository::RepositoryError;
use crate::domain::repositories::category_repository::CategoryRepository;
use metrics::counter;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum CategoryServiceError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] RepositoryError),
}

/// 分类计数聚合
///
/// 按分类ID对关联记录分组计数，再与分类表做左连接：
/// 没有任何文章的分类以 `count = 0` 出现，指向未知分类的关联被忽略。
/// 输出顺序与输入的分类顺序一致。
pub struct CategoryAggregator;

impl CategoryAggregator {
    pub fn count(categories: Vec<Category>, links: &[ArticleCategoryLink]) -> Vec<CategoryCount> {
        let mut counts: HashMap<i32, u64> = HashMap::new();
        for link in links {
            *counts.entry(link.category_id).or_insert(0) += 1;
        }

        categories
            .into_iter()
            .map(|category| {
                let count = counts.get(&category.id).copied().unwrap_or(0);
                CategoryCount::new(category, count)
            })
            .collect()
    }
}

/// 分类服务
pub struct CategoryService<CR> {
    category_repo: Arc<CR>,
}

impl<CR> CategoryService<CR>
where
    CR: CategoryRepository + 'static,
{
    pub fn new(category_repo: Arc<CR>) -> Self {
        Self { category_repo }
    }

    /// 列出分类
    ///
    /// # 参数
    ///
    /// * `with_counts` - 为 `true` 时附带每个分类的文章数
    ///
    /// # 返回值
    ///
    /// * `Ok(CategoryListing)` - 按分类ID升序的列表
    /// * `Err(CategoryServiceError)` - 分类或关联读取失败
    pub async fn list(&self, with_counts: bool) -> Result<CategoryListing, CategoryServiceError> {
        counter!("category_listings_total", "counted" => with_counts.to_string()).increment(1);

        let categories = self.category_repo.find_all().await?;
        if !with_counts {
            return Ok(CategoryListing::Plain(categories));
        }

        let links = self.category_repo.find_links().await?;
        debug!(
            categories = categories.len(),
            links = links.len(),
            "Aggregating category counts"
        );

        Ok(CategoryListing::Counted(CategoryAggregator::count(
            categories, &links,
        )))
    }
}
