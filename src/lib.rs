// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 请求DTO及其校验规则
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、搜索与分类聚合逻辑、服务和仓库接口
pub mod domain;

/// 基础设施模块
///
/// 提供数据库连接、实体、仓库实现和指标导出
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由和处理器
pub mod presentation;

/// 工具模块
///
/// 日志初始化等通用辅助功能
pub mod utils;
