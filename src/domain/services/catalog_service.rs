// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{ServiceError, ServiceResult};
use crate::domain::models::podcast::{
    Episode, EpisodePatch, NewEpisode, NewPodcast, Podcast, PodcastDetail, PodcastPatch,
};
use crate::domain::repositories::episode_repository::EpisodeRepository;
use crate::domain::repositories::podcast_repository::{PodcastFilter, PodcastRepository};
use std::sync::Arc;
use validator::Validate;

/// 目录服务
///
/// 负责播客与剧集的完整生命周期。所有更新与删除操作都先经过
/// 与读取相同的“查找或失败”函数（播客为 `get_podcast`，剧集为 `get_episode`），
/// 保证同一个缺失在读、改、删路径上得到完全相同的错误。
pub struct CatalogService {
    podcasts: Arc<dyn PodcastRepository>,
    episodes: Arc<dyn EpisodeRepository>,
}

impl CatalogService {
    /// 创建新的目录服务实例
    ///
    /// # 参数
    ///
    /// * `podcasts` - 播客仓库
    /// * `episodes` - 剧集仓库
    pub fn new(podcasts: Arc<dyn PodcastRepository>, episodes: Arc<dyn EpisodeRepository>) -> Self {
        Self { podcasts, episodes }
    }

    /// 查询全部播客，不分页
    pub async fn list_podcasts(&self) -> ServiceResult<Vec<Podcast>> {
        let podcasts = self.podcasts.find_all().await?;
        tracing::debug!("Listed {} podcasts", podcasts.len());
        Ok(podcasts)
    }

    /// 创建播客
    ///
    /// 新播客的评分为空。
    ///
    /// # 返回值
    ///
    /// * `Ok(i32)` - 新分配的播客ID
    /// * `Err(ServiceError::Internal)` - 持久化失败
    pub async fn create_podcast(&self, title: &str, category: &str) -> ServiceResult<i32> {
        let podcast = self.podcasts.insert(NewPodcast::new(title, category)).await?;
        tracing::info!("Podcast {} created (title: {})", podcast.id, podcast.title);
        Ok(podcast.id)
    }

    /// 查找播客或失败
    ///
    /// 返回播客及其全部剧集。这是播客的唯一存在性检查入口，
    /// 更新、删除、剧集查询都复用它。
    ///
    /// # 返回值
    ///
    /// * `Ok(PodcastDetail)` - 播客及剧集
    /// * `Err(ServiceError::PodcastNotFound)` - 播客不存在
    pub async fn get_podcast(&self, id: i32) -> ServiceResult<PodcastDetail> {
        match self.podcasts.find_with_episodes(id).await? {
            Some(detail) => Ok(detail),
            None => {
                tracing::warn!("Podcast {} not found", id);
                Err(ServiceError::PodcastNotFound(id))
            }
        }
    }

    /// 删除播客
    ///
    /// 剧集与评论由持久化层级联删除。
    pub async fn delete_podcast(&self, id: i32) -> ServiceResult<()> {
        self.get_podcast(id).await?;
        self.podcasts.delete(id).await?;
        tracing::info!("Podcast {} deleted", id);
        Ok(())
    }

    /// 更新播客
    ///
    /// 先查找，再校验评分，最后浅合并并保存。校验失败时不做任何写入。
    ///
    /// # 参数
    ///
    /// * `id` - 播客ID
    /// * `patch` - 更新补丁，未提供的字段保持原值
    pub async fn update_podcast(&self, id: i32, patch: PodcastPatch) -> ServiceResult<()> {
        let PodcastDetail { mut podcast, .. } = self.get_podcast(id).await?;

        if let Err(errors) = patch.validate() {
            tracing::warn!("Rejected update of podcast {}: {}", id, errors);
            return Err(errors.into());
        }

        podcast.apply(patch);
        self.podcasts.save(&podcast).await?;
        tracing::info!("Podcast {} updated", id);
        Ok(())
    }

    /// 按标题检索播客
    ///
    /// 不区分大小写的子串匹配；没有匹配时返回空列表而不是错误。
    pub async fn search_podcasts(&self, title: &str) -> ServiceResult<Vec<Podcast>> {
        let podcasts = self
            .podcasts
            .find_where(&PodcastFilter::title_contains(title))
            .await?;
        tracing::debug!("Search '{}' matched {} podcasts", title, podcasts.len());
        Ok(podcasts)
    }

    /// 查询播客的全部剧集
    pub async fn list_episodes(&self, podcast_id: i32) -> ServiceResult<Vec<Episode>> {
        Ok(self.get_podcast(podcast_id).await?.episodes)
    }

    /// 查找剧集或失败
    ///
    /// 播客不存在时返回 `PodcastNotFound`；播客存在但没有该剧集时返回
    /// `EpisodeNotFound`，调用方可以区分这两种情况。
    pub async fn get_episode(&self, podcast_id: i32, episode_id: i32) -> ServiceResult<Episode> {
        let episodes = self.list_episodes(podcast_id).await?;
        match episodes.into_iter().find(|episode| episode.id == episode_id) {
            Some(episode) => Ok(episode),
            None => {
                tracing::warn!("Episode {} not found in podcast {}", episode_id, podcast_id);
                Err(ServiceError::EpisodeNotFound {
                    podcast_id,
                    episode_id,
                })
            }
        }
    }

    /// 在播客下创建剧集
    ///
    /// # 返回值
    ///
    /// * `Ok(i32)` - 新分配的剧集ID
    /// * `Err(ServiceError::PodcastNotFound)` - 播客不存在
    pub async fn create_episode(
        &self,
        podcast_id: i32,
        title: &str,
        category: &str,
    ) -> ServiceResult<i32> {
        let PodcastDetail { podcast, .. } = self.get_podcast(podcast_id).await?;
        let episode = self
            .episodes
            .insert(NewEpisode::new(podcast.id, title, category))
            .await?;
        tracing::info!("Episode {} created in podcast {}", episode.id, podcast.id);
        Ok(episode.id)
    }

    /// 删除剧集
    ///
    /// `podcast_id` 只用于存在性检查，删除时仅按剧集ID定位。
    pub async fn delete_episode(&self, podcast_id: i32, episode_id: i32) -> ServiceResult<()> {
        let episode = self.get_episode(podcast_id, episode_id).await?;
        self.episodes.delete(episode.id).await?;
        tracing::info!("Episode {} deleted from podcast {}", episode.id, podcast_id);
        Ok(())
    }

    /// 更新剧集
    pub async fn update_episode(
        &self,
        podcast_id: i32,
        episode_id: i32,
        patch: EpisodePatch,
    ) -> ServiceResult<()> {
        let mut episode = self.get_episode(podcast_id, episode_id).await?;
        episode.apply(patch);
        self.episodes.save(&episode).await?;
        tracing::info!("Episode {} updated in podcast {}", episode_id, podcast_id);
        Ok(())
    }
}

#[cfg(test)]
#[path = "catalog_service_test.rs"]
mod tests;
