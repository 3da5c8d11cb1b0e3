// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;

/// `GET /api/categories` 的查询参数
#[derive(Debug, Default, Deserialize)]
pub struct CategoryQueryParams {
    /// 为 `true` 时返回每个分类的文章数
    pub count: Option<bool>,
}

impl CategoryQueryParams {
    pub fn with_counts(&self) -> bool {
        self.count.unwrap_or(false)
    }
}
