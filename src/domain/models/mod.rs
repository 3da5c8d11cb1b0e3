// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了博客系统的核心业务实体，包括：
/// - 文章（article）：标题、摘要、正文以及所属分类和评论
/// - 分类（category）：分类本身、分类与文章的关联以及分类计数
/// - 评论（comment）：挂在文章下的读者评论
pub mod article;
pub mod category;
pub mod comment;
