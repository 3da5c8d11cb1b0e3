// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::article::Article;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search query cannot be empty")]
    InvalidQuery,
}

/// 可参与匹配的文章字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
    Title,
    Announce,
    FullText,
}

impl MatchField {
    fn text<'a>(&self, article: &'a Article) -> &'a str {
        match self {
            MatchField::Title => &article.title,
            MatchField::Announce => &article.announce,
            MatchField::FullText => &article.full_text,
        }
    }
}

/// 经过校验的搜索词
///
/// 只能通过 [`SearchQuery::parse`] 构造，因此持有者无需再检查空串。
/// 构造时即完成大小写折叠，匹配阶段不再重复计算。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    folded: String,
}

impl SearchQuery {
    /// 校验并构造搜索词
    ///
    /// 缺失、空串或仅含空白的搜索词返回 `SearchError::InvalidQuery`
    pub fn parse(query: Option<&str>) -> Result<Self, SearchError> {
        match query {
            Some(q) if !q.trim().is_empty() => Ok(Self {
                raw: q.to_string(),
                folded: fold_case(q),
            }),
            _ => Err(SearchError::InvalidQuery),
        }
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// 子串匹配搜索引擎
///
/// 文章的任一配置字段以不区分大小写的方式包含搜索词即视为命中。
/// 结果保持语料原有顺序，不做相关度打分；同一篇文章最多出现一次。
#[derive(Debug, Clone)]
pub struct SearchEngine {
    fields: Vec<MatchField>,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self {
            fields: vec![MatchField::Title],
        }
    }
}

impl SearchEngine {
    /// 按给定字段创建引擎；字段列表为空时退回到仅匹配标题
    pub fn new(fields: Vec<MatchField>) -> Self {
        let mut unique = Vec::with_capacity(fields.len());
        for field in fields {
            if !unique.contains(&field) {
                unique.push(field);
            }
        }

        if unique.is_empty() {
            return Self::default();
        }

        Self { fields: unique }
    }

    pub fn fields(&self) -> &[MatchField] {
        &self.fields
    }

    /// 判断单篇文章是否命中
    pub fn matches(&self, query: &SearchQuery, article: &Article) -> bool {
        self.fields
            .iter()
            .any(|field| fold_case(field.text(article)).contains(&query.folded))
    }

    /// 在语料中搜索
    ///
    /// # 参数
    ///
    /// * `query` - 已校验的搜索词
    /// * `corpus` - 完整读取的文章语料
    ///
    /// # 返回值
    ///
    /// 命中文章的引用，顺序与语料一致；无命中时为空
    pub fn search<'a>(&self, query: &SearchQuery, corpus: &'a [Article]) -> Vec<&'a Article> {
        corpus
            .iter()
            .filter(|article| self.matches(query, article))
            .collect()
    }
}

/// 逐字符的 Unicode 小写折叠，词尾 ς 与 σ 视为同一字母
///
/// 必须与位置无关：同一个子串出现在词中或词尾时折叠结果相同。
fn fold_case(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect()
}
