// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 请求提取器模块
///
/// 包装 axum 自带的提取器，使解析失败也以 `{"error": ...}` 的 400 响应返回
pub mod request;
