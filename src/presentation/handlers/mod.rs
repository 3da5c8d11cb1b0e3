// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 每个处理器把请求参数交给对应的领域服务，并把结果映射为HTTP响应
pub mod article_handler;
pub mod category_handler;
pub mod comment_handler;
pub mod search_handler;
