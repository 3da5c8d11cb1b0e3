// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::comment::Comment;

/// 文章实体
///
/// 存储层一次性物化的完整文章：正文字段、所属分类（按ID升序）以及评论。
/// 搜索只读取它，不会在一次搜索过程中修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i32,
    /// 标题，非空
    pub title: String,
    /// 摘要
    pub announce: String,
    /// 正文
    pub full_text: String,
    /// 配图文件名
    pub picture: Option<String>,
    pub published_at: DateTime<Utc>,
    pub categories: Vec<Category>,
    pub comments: Vec<Comment>,
}

/// 创建或整体更新文章时的写模型
#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
    pub title: String,
    pub announce: String,
    pub full_text: String,
    pub picture: Option<String>,
    pub published_at: DateTime<Utc>,
    pub category_ids: Vec<i32>,
}
