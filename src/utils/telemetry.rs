// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::LoggingSettings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,typoteka=debug".into())
}

/// 安装全局 tracing 订阅器
///
/// 过滤规则取自 `RUST_LOG`，缺省为 `info,typoteka=debug`。
/// 重复调用（例如多个测试）时忽略已安装的错误。
pub fn init_telemetry(settings: &LoggingSettings) {
    let registry = tracing_subscriber::registry().with(env_filter());

    let result = if settings.json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    if result.is_err() {
        tracing::debug!("Global tracing subscriber already installed");
    }
}
