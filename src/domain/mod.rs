// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：文章、分类、评论
/// - 仓库接口（repositories）：数据持久化抽象接口
/// - 搜索（search）：文章语料上的子串匹配
/// - 服务（services）：搜索、分类聚合以及文章/评论的增删改查
///
/// 领域层不依赖于任何外部实现，仓库实现由基础设施层注入。
pub mod models;
pub mod repositories;
pub mod search;
pub mod services;
