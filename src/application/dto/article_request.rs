// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::article::NewArticle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 创建/更新文章的请求体
#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRequestDto {
    #[validate(length(min = 1, max = 250, message = "Title must be 1-250 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 250, message = "Announce must be 1-250 characters"))]
    pub announce: String,
    #[validate(length(max = 1000, message = "Full text must not exceed 1000 characters"))]
    #[serde(default)]
    pub full_text: String,
    pub picture: Option<String>,
    /// 缺省为当前时间
    pub published_at: Option<DateTime<Utc>>,
    #[validate(length(min = 1, message = "At least one category is required"))]
    pub categories: Vec<i32>,
}

impl From<ArticleRequestDto> for NewArticle {
    fn from(dto: ArticleRequestDto) -> Self {
        NewArticle {
            title: dto.title,
            announce: dto.announce,
            full_text: dto.full_text,
            picture: dto.picture,
            published_at: dto.published_at.unwrap_or_else(Utc::now),
            category_ids: dto.categories,
        }
    }
}
