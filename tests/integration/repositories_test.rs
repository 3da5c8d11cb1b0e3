// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use typoteka::domain::repositories::article_repository::{ArticleRepository, RepositoryError};
use typoteka::domain::repositories::category_repository::CategoryRepository;
use typoteka::domain::repositories::comment_repository::CommentRepository;
use typoteka::infrastructure::repositories::article_repo_impl::ArticleRepositoryImpl;
use typoteka::infrastructure::repositories::category_repo_impl::CategoryRepositoryImpl;
use typoteka::infrastructure::repositories::comment_repo_impl::CommentRepositoryImpl;

use super::helpers::{migrated_db, new_article, seed, LIFE, TREES};

#[tokio::test]
async fn find_all_on_empty_database() {
    let db = migrated_db().await;
    let repo = ArticleRepositoryImpl::new(db);

    let articles = repo.find_all().await.unwrap();

    assert!(articles.is_empty());
}

#[tokio::test]
async fn category_links_match_seeded_associations() {
    let db = migrated_db().await;
    let (ids, _) = seed(&db).await;
    let repo = CategoryRepositoryImpl::new(db);

    let categories = repo.find_all().await.unwrap();
    let mut links: Vec<(i32, i32)> = repo
        .find_links()
        .await
        .unwrap()
        .into_iter()
        .map(|l| (l.category_id, l.article_id))
        .collect();
    links.sort();

    assert_eq!(
        categories.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(links, vec![(TREES, ids[0]), (TREES, ids[1]), (LIFE, ids[2])]);
}

#[tokio::test]
async fn article_loads_categories_sorted_and_comments() {
    let db = migrated_db().await;
    seed(&db).await;
    let articles = ArticleRepositoryImpl::new(db.clone());

    let created = articles
        .create(&new_article("Борьба с прокрастинацией", vec![LIFE, TREES]))
        .await
        .unwrap();
    CommentRepositoryImpl::new(db)
        .create(created.id, "Согласен с автором, очень полезная статья!")
        .await
        .unwrap();

    let loaded = articles.find_by_id(created.id).await.unwrap().unwrap();
    let category_ids: Vec<i32> = loaded.categories.iter().map(|c| c.id).collect();
    assert_eq!(category_ids, vec![TREES, LIFE]);
    assert_eq!(loaded.comments.len(), 1);
    assert_eq!(loaded.published_at, created.published_at);
}

#[tokio::test]
async fn delete_removes_links_and_comments() {
    let db = migrated_db().await;
    let (ids, _) = seed(&db).await;
    let articles = ArticleRepositoryImpl::new(db.clone());

    let deleted = articles.delete(ids[0]).await.unwrap();

    assert_eq!(deleted.id, ids[0]);
    assert_eq!(deleted.comments.len(), 1);
    assert_eq!(deleted.categories.len(), 1);

    assert!(!articles.exists(ids[0]).await.unwrap());
    assert!(articles.find_by_id(ids[0]).await.unwrap().is_none());
    let links = CategoryRepositoryImpl::new(db.clone())
        .find_links()
        .await
        .unwrap();
    assert!(links.iter().all(|l| l.article_id != ids[0]));
    let comments = CommentRepositoryImpl::new(db)
        .find_by_article(ids[0])
        .await
        .unwrap();
    assert!(comments.is_empty());
}

#[tokio::test]
async fn delete_missing_article_is_not_found() {
    let db = migrated_db().await;
    let articles = ArticleRepositoryImpl::new(db);

    let result = articles.delete(42).await;

    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[tokio::test]
async fn update_missing_article_is_not_found() {
    let db = migrated_db().await;
    let articles = ArticleRepositoryImpl::new(db);

    let result = articles.update(42, &new_article("Title", vec![])).await;

    assert!(matches!(result, Err(RepositoryError::NotFound)));
}
