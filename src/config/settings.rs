// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::search::engine::MatchField;

/// 应用程序配置设置
///
/// 包含数据库、服务器、搜索、指标和日志等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 服务器配置
    pub server: ServerSettings,
    /// 搜索配置
    pub search: SearchSettings,
    /// 指标导出配置
    pub metrics: MetricsSettings,
    /// 日志配置
    pub logging: LoggingSettings,
}

/// 数据库配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
    /// 是否输出 SQL 日志
    #[serde(default)]
    pub sqlx_logging: bool,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 搜索配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    /// 参与匹配的文章字段，默认仅标题
    pub match_fields: Vec<MatchField>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            match_fields: vec![MatchField::Title],
        }
    }
}

/// Prometheus 指标配置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    pub enabled: bool,
    /// 导出器监听地址，例如 `0.0.0.0:9000`
    pub listen_addr: String,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// 以 JSON 格式输出日志
    pub json: bool,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 加载顺序：内置默认值 → `config/default` → `config/{APP_ENVIRONMENT}`
    /// （未设置时为 `config/development`） →
    /// `TYPOTEKA__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env_file = environment_file(std::env::var("APP_ENVIRONMENT").ok());
        let builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite://typoteka.db?mode=rwc")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            .set_default("database.sqlx_logging", false)?
            .set_default("search.match_fields", vec!["title"])?
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")?
            .set_default("logging.json", false)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&env_file).required(false))
            .add_source(
                Environment::with_prefix("TYPOTEKA")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("search.match_fields")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}

/// 环境覆盖文件，`APP_ENVIRONMENT` 未设置时为 `development`
pub(crate) fn environment_file(environment: Option<String>) -> String {
    let environment = environment.unwrap_or_else(|| "development".to_string());
    format!("config/{}", environment)
}
