// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::podcast::{Episode, NewEpisode};
use async_trait::async_trait;

/// 剧集查询条件
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpisodeFilter {
    /// 所属播客ID
    pub podcast_id: Option<i32>,
}

impl EpisodeFilter {
    pub fn podcast(podcast_id: i32) -> Self {
        Self {
            podcast_id: Some(podcast_id),
        }
    }

    pub fn matches(&self, episode: &Episode) -> bool {
        self.podcast_id.map_or(true, |id| episode.podcast_id == id)
    }
}

/// 剧集仓库特质
///
/// 定义剧集数据访问接口
#[async_trait]
pub trait EpisodeRepository: Send + Sync {
    /// 根据ID查找剧集
    async fn find_by_id(&self, id: i32) -> Result<Option<Episode>, RepositoryError>;
    /// 按条件查询剧集
    async fn find_where(&self, filter: &EpisodeFilter) -> Result<Vec<Episode>, RepositoryError>;
    /// 首次持久化剧集；所属播客不存在时返回 `RepositoryError::Conflict`
    async fn insert(&self, episode: NewEpisode) -> Result<Episode, RepositoryError>;
    /// 覆盖保存已有剧集
    async fn save(&self, episode: &Episode) -> Result<Episode, RepositoryError>;
    /// 根据ID删除剧集
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
