// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::podcast::{Episode, Podcast, PodcastDetail};
use crate::domain::models::user::User;
use crate::domain::services::{ServiceError, ServiceResult};
use serde::{Deserialize, Serialize};

/// 统一结果信封
///
/// 序列化为 `{ "ok": bool, "error"?: string }`，失败时 `error`
/// 只包含面向调用方的简短信息。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreOutput {
    /// 操作是否成功
    pub ok: bool,
    /// 失败原因
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CoreOutput {
    /// 成功结果
    pub fn success() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    /// 失败结果
    pub fn failure(err: &ServiceError) -> Self {
        Self {
            ok: false,
            error: Some(err.to_string()),
        }
    }
}

impl From<ServiceResult<()>> for CoreOutput {
    fn from(result: ServiceResult<()>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(err) => Self::failure(&err),
        }
    }
}

/// 携带操作专属负载的结果信封
///
/// 负载字段与 `ok`/`error` 平铺在同一层，失败时不输出负载字段。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Output<T> {
    #[serde(flatten)]
    pub core: CoreOutput,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Output<T> {
    /// 把服务结果转换为信封
    ///
    /// # 参数
    ///
    /// * `result` - 服务方法的返回值
    /// * `wrap` - 把成功值包装为负载结构
    pub fn from_result<U>(result: ServiceResult<U>, wrap: impl FnOnce(U) -> T) -> Self {
        match result {
            Ok(value) => Self {
                core: CoreOutput::success(),
                data: Some(wrap(value)),
            },
            Err(err) => Self {
                core: CoreOutput::failure(&err),
                data: None,
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.core.ok
    }

    pub fn error(&self) -> Option<&str> {
        self.core.error.as_deref()
    }
}

/// 新建实体的ID
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdPayload {
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PodcastPayload {
    pub podcast: PodcastDetail,
}

/// 播客列表，同时用于搜索结果与订阅列表
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PodcastsPayload {
    pub podcasts: Vec<Podcast>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodesPayload {
    pub episodes: Vec<Episode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodePayload {
    pub episode: Episode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserPayload {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenPayload {
    pub token: String,
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
