// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 文章分类
///
/// 名称的唯一性由存储层的唯一索引保证
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// 分类与文章的关联记录（多对多中间表的一行）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleCategoryLink {
    pub category_id: i32,
    pub article_id: i32,
}

/// 带文章计数的分类
///
/// 按请求即时计算，不做持久化也不缓存
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub id: i32,
    pub name: String,
    pub count: u64,
}

impl CategoryCount {
    pub fn new(category: Category, count: u64) -> Self {
        Self {
            id: category.id,
            name: category.name,
            count,
        }
    }
}

/// 分类列表的两种形态
///
/// 序列化时不带标签，分别输出 `{id, name}` 或 `{id, name, count}` 数组
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CategoryListing {
    Plain(Vec<Category>),
    Counted(Vec<CategoryCount>),
}
