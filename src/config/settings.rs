// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// 环境变量前缀，例如 `PODCASTRS__DATABASE__URL`
pub const ENV_PREFIX: &str = "PODCASTRS";

/// 应用程序配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 日志配置
    pub log: LogSettings,
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
    /// 是否输出 SQL 语句日志
    #[serde(default = "default_sql_logging")]
    pub sql_logging: bool,
}

fn default_sql_logging() -> bool {
    true
}

/// 日志配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// 过滤指令，`RUST_LOG` 存在时以其为准
    pub filter: String,
    /// 是否输出 JSON 格式日志
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "info,podcastrs=debug".to_string(),
            json: false,
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从当前工作目录下的 `config/` 目录与环境变量加载配置
    ///
    /// # 返回值
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(Path::new("config"))
    }

    /// 从指定目录加载配置
    ///
    /// 加载顺序：内置默认值、`default.toml`、`{APP_ENVIRONMENT}.toml`、
    /// 以 `PODCASTRS` 为前缀的环境变量，后者覆盖前者。
    ///
    /// # 参数
    ///
    /// * `dir` - 配置文件所在目录
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default DB pool settings
            .set_default("database.url", "sqlite://podcastrs.db?mode=rwc")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            .set_default("database.sql_logging", true)?
            // Default log settings
            .set_default("log.filter", "info,podcastrs=debug")?
            .set_default("log.json", false)?
            .add_source(File::from(dir.join("default")).required(false))
            .add_source(File::from(dir.join(&env)).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
