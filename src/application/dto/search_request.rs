// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;

/// `GET /api/search` 的查询参数
///
/// `query` 缺失与空串在进入搜索核心之前由处理器拒绝
#[derive(Debug, Default, Deserialize)]
pub struct SearchQueryParams {
    pub query: Option<String>,
}
