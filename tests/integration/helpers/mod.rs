// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;

use typoteka::config::settings::{
    DatabaseSettings, LoggingSettings, MetricsSettings, SearchSettings, ServerSettings, Settings,
};
use typoteka::domain::models::article::NewArticle;
use typoteka::domain::repositories::article_repository::ArticleRepository;
use typoteka::domain::repositories::comment_repository::CommentRepository;
use typoteka::infrastructure::database::connection;
use typoteka::infrastructure::database::entities::category;
use typoteka::infrastructure::repositories::article_repo_impl::ArticleRepositoryImpl;
use typoteka::infrastructure::repositories::comment_repo_impl::CommentRepositoryImpl;
use typoteka::presentation::routes;

pub const TREES: i32 = 1;
pub const LIFE: i32 = 2;
pub const EMPTY: i32 = 3;

pub const STONES_TITLE: &str = "Как собрать камни бесконечности new";

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db: Arc<DatabaseConnection>,
    /// 种子文章ID，按插入顺序
    pub article_ids: Vec<i32>,
    pub comment_id: i32,
}

pub fn test_settings(search: SearchSettings) -> Settings {
    Settings {
        database: DatabaseSettings {
            url: "sqlite::memory:".to_string(),
            max_connections: Some(1),
            min_connections: Some(1),
            connect_timeout: Some(5),
            idle_timeout: None,
            sqlx_logging: false,
        },
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        search,
        metrics: MetricsSettings {
            enabled: false,
            listen_addr: "127.0.0.1:0".to_string(),
        },
        logging: LoggingSettings { json: false },
    }
}

/// 迁移后的空内存数据库
pub async fn migrated_db() -> Arc<DatabaseConnection> {
    let settings = test_settings(SearchSettings::default());
    let db = connection::create_pool(&settings.database)
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    Arc::new(db)
}

pub fn new_article(title: &str, category_ids: Vec<i32>) -> NewArticle {
    NewArticle {
        title: title.to_string(),
        announce: format!("{} (анонс)", title),
        full_text: "Первая большая ёлка была установлена только в 1938 году.".to_string(),
        picture: None,
        published_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        category_ids,
    }
}

/// 写入分类、三篇文章和一条评论
///
/// 关联为 (1,A) (1,B) (2,C)，分类 3 没有文章
pub async fn seed(db: &Arc<DatabaseConnection>) -> (Vec<i32>, i32) {
    for name in ["Деревья", "За жизнь", "Без статей"] {
        category::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(db.as_ref())
        .await
        .expect("Failed to insert category");
    }

    let articles = ArticleRepositoryImpl::new(db.clone());
    let mut ids = Vec::new();
    for (title, categories) in [
        (STONES_TITLE, vec![TREES]),
        ("Title", vec![TREES]),
        ("Обзор новейшего смартфона", vec![LIFE]),
    ] {
        let article = articles
            .create(&new_article(title, categories))
            .await
            .expect("Failed to insert article");
        ids.push(article.id);
    }

    let comment = CommentRepositoryImpl::new(db.clone())
        .create(ids[0], "Это где ж такие красоты? Хочу туда!")
        .await
        .expect("Failed to insert comment");

    (ids, comment.id)
}

pub async fn create_test_app() -> TestApp {
    create_test_app_with_search(SearchSettings::default()).await
}

pub async fn create_test_app_with_search(search: SearchSettings) -> TestApp {
    let db = migrated_db().await;
    let (article_ids, comment_id) = seed(&db).await;

    let settings = Arc::new(test_settings(search));
    let app = routes::app(db.clone(), settings);
    let server = TestServer::new(app).expect("Failed to create test server");

    TestApp {
        server,
        db,
        article_ids,
        comment_id,
    }
}
