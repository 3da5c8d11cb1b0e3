// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义HTTP请求参数与请求体，校验规则通过 `validator` 声明
pub mod article_request;
pub mod category_query;
pub mod comment_request;
pub mod search_request;
