// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 文章仓库（article_repository）：文章及其分类、评论的读写，另含 `RepositoryError`
/// - 分类仓库（category_repository）：分类表与分类-文章关联的读取
/// - 评论仓库（comment_repository）：文章评论的读写
pub mod article_repository;
pub mod category_repository;
pub mod comment_repository;
