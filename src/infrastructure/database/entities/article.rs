// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

/// 文章数据库实体
///
/// 对应 articles 表；分类通过 article_categories 多对多关联
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub announce: String,
    #[sea_orm(column_type = "Text")]
    pub full_text: String,
    pub picture: Option<String>,
    pub published_at: ChronoDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comment::Entity")]
    Comments,
    #[sea_orm(has_many = "super::article_category::Entity")]
    ArticleCategories,
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<super::article_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArticleCategories.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::article_category::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::article_category::Relation::Article.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
