// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 迁移命令行入口
///
/// 通过 `DATABASE_URL` 指定目标数据库，例如 `cargo run -p migration -- up`
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
