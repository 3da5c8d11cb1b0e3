// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::article::Article;
use crate::domain::repositories::article_repository::{ArticleRepository, RepositoryError};
use crate::domain::search::engine::{SearchEngine, SearchError, SearchQuery};
use metrics::{counter, histogram};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SearchServiceError {
    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] SearchError),
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] RepositoryError),
}

/// 文章搜索服务
///
/// 先完整读取语料，再交给 [`SearchEngine`] 过滤；读取失败时不会返回部分结果。
/// 空结果是正常返回值，是否映射为“未找到”由调用方决定。
pub struct SearchService<AR> {
    article_repo: Arc<AR>,
    engine: SearchEngine,
}

impl<AR> SearchService<AR>
where
    AR: ArticleRepository + 'static,
{
    pub fn new(article_repo: Arc<AR>, engine: SearchEngine) -> Self {
        Self {
            article_repo,
            engine,
        }
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Article>, SearchServiceError> {
        counter!("search_requests_total").increment(1);

        let corpus = self.article_repo.find_all().await?;
        let results: Vec<Article> = self
            .engine
            .search(query, &corpus)
            .into_iter()
            .cloned()
            .collect();

        debug!(
            query = %query,
            fields = ?self.engine.fields(),
            corpus = corpus.len(),
            matched = results.len(),
            "Search finished"
        );
        histogram!("search_result_size").record(results.len() as f64);
        if !results.is_empty() {
            counter!("search_hits_total").increment(1);
        }

        Ok(results)
    }
}
