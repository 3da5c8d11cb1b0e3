// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
///
/// 使用SeaORM框架进行对象关系映射，表结构由 migration 子项目创建
pub mod article;
pub mod article_category;
pub mod category;
pub mod comment;
