// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::LogSettings;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,podcastrs=debug";

/// 构造日志过滤器
///
/// `RUST_LOG` 优先；其次是配置中的过滤指令；两者都无效时回退到默认值。
pub fn build_filter(settings: &LogSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// 初始化全局 tracing 订阅者
///
/// 已经存在全局订阅者时返回错误而不是 panic，因此可以重复调用。
///
/// # 参数
///
/// * `settings` - 日志配置
pub fn init_telemetry(settings: &LogSettings) -> Result<(), TryInitError> {
    let json_layer = settings.json.then(|| fmt::layer().json());
    let plain_layer = (!settings.json).then(fmt::layer);

    tracing_subscriber::registry()
        .with(build_filter(settings))
        .with(json_layer)
        .with(plain_layer)
        .try_init()
}
