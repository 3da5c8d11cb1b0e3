// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, DbBackend};
use typoteka::config::settings::DatabaseSettings;
use typoteka::infrastructure::database::connection;

fn memory_settings(max_connections: Option<u32>) -> DatabaseSettings {
    DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections,
        min_connections: None,
        connect_timeout: Some(5),
        idle_timeout: None,
        sqlx_logging: false,
    }
}

#[tokio::test]
async fn connects_to_sqlite() {
    let db = connection::create_pool(&memory_settings(None)).await.unwrap();

    assert_eq!(db.get_database_backend(), DbBackend::Sqlite);
}

#[tokio::test]
async fn in_memory_database_keeps_schema_across_queries() {
    // A larger pool must still share one in-memory database
    let db = connection::create_pool(&memory_settings(Some(8)))
        .await
        .unwrap();

    Migrator::up(&db, None).await.unwrap();

    let applied = Migrator::get_applied_migrations(&db).await.unwrap();
    assert_eq!(applied.len(), 4);
}

#[tokio::test]
async fn invalid_url_is_an_error() {
    let settings = DatabaseSettings {
        url: "not-a-database://nowhere".to_string(),
        ..memory_settings(None)
    };

    assert!(connection::create_pool(&settings).await.is_err());
}
