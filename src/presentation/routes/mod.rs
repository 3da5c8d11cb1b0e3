// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Extension, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;

use crate::config::settings::Settings;
use crate::infrastructure::repositories::article_repo_impl::ArticleRepositoryImpl;
use crate::infrastructure::repositories::category_repo_impl::CategoryRepositoryImpl;
use crate::infrastructure::repositories::comment_repo_impl::CommentRepositoryImpl;
use crate::presentation::handlers::{
    article_handler, category_handler, comment_handler, search_handler,
};

type Articles = ArticleRepositoryImpl;
type Categories = CategoryRepositoryImpl;
type Comments = CommentRepositoryImpl;

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由（尚未注入依赖，见 [`app`]）
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version));

    let api_routes = Router::new()
        .route("/search", get(search_handler::search::<Articles>))
        .route(
            "/categories",
            get(category_handler::list_categories::<Categories>),
        )
        .route(
            "/articles",
            get(article_handler::list_articles::<Articles, Categories>)
                .post(article_handler::create_article::<Articles, Categories>),
        )
        .route(
            "/articles/{id}",
            get(article_handler::get_article::<Articles, Categories>)
                .put(article_handler::update_article::<Articles, Categories>)
                .delete(article_handler::delete_article::<Articles, Categories>),
        )
        .route(
            "/articles/{id}/comments",
            get(comment_handler::list_comments::<Comments, Articles>)
                .post(comment_handler::create_comment::<Comments, Articles>),
        )
        .route(
            "/articles/{id}/comments/{comment_id}",
            delete(comment_handler::delete_comment::<Comments, Articles>),
        );

    Router::new().merge(public_routes).nest("/api", api_routes)
}

/// 组装完整应用
///
/// 基于同一个数据库连接构造各仓库，并以 `Extension` 形式注入到路由中
pub fn app(db: Arc<DatabaseConnection>, settings: Arc<Settings>) -> Router {
    let article_repo = Arc::new(ArticleRepositoryImpl::new(db.clone()));
    let category_repo = Arc::new(CategoryRepositoryImpl::new(db.clone()));
    let comment_repo = Arc::new(CommentRepositoryImpl::new(db));

    routes()
        .layer(Extension(article_repo))
        .layer(Extension(category_repo))
        .layer(Extension(comment_repo))
        .layer(Extension(settings))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
