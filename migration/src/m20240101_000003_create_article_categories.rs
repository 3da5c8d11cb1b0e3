use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_categories::Categories;
use crate::m20240101_000002_create_articles::Articles;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArticleCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ArticleCategories::ArticleId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ArticleCategories::CategoryId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ArticleCategories::ArticleId)
                            .col(ArticleCategories::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_categories_article")
                            .from(ArticleCategories::Table, ArticleCategories::ArticleId)
                            .to(Articles::Table, Articles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_categories_category")
                            .from(ArticleCategories::Table, ArticleCategories::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Cascading deletes from categories look links up by category_id
        manager
            .create_index(
                Index::create()
                    .name("idx_article_categories_category")
                    .table(ArticleCategories::Table)
                    .col(ArticleCategories::CategoryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArticleCategories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ArticleCategories {
    Table,
    ArticleId,
    CategoryId,
}
