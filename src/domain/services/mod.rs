// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 搜索服务（search_service）：读取完整语料并按搜索词过滤文章
/// - 分类服务（category_service）：分类列表与按分类的文章计数聚合
/// - 文章服务（article_service）：文章的增删改查
/// - 评论服务（comment_service）：文章评论的增删查
///
/// 服务只持有仓库的 `Arc` 句柄，由调用方在构造时注入。
pub mod article_service;
pub mod category_service;
pub mod comment_service;
pub mod search_service;
