// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索领域模块
///
/// 文章语料上的纯内存子串匹配：搜索词校验、字段选择和命中过滤。
/// 不涉及任何 I/O，语料由调用方一次性读取后传入。
pub mod engine;
