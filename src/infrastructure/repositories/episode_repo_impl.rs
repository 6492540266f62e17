// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::map_db_err;
use crate::domain::models::podcast::{Episode, NewEpisode};
use crate::domain::repositories::episode_repository::{EpisodeFilter, EpisodeRepository};
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::episode;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 剧集仓库实现
#[derive(Clone)]
pub struct EpisodeRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl EpisodeRepositoryImpl {
    /// 创建新的剧集仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EpisodeRepository for EpisodeRepositoryImpl {
    async fn find_by_id(&self, id: i32) -> Result<Option<Episode>, RepositoryError> {
        let model = episode::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_where(&self, filter: &EpisodeFilter) -> Result<Vec<Episode>, RepositoryError> {
        let mut query = episode::Entity::find();
        if let Some(podcast_id) = filter.podcast_id {
            query = query.filter(episode::Column::PodcastId.eq(podcast_id));
        }

        let models = query
            .order_by_asc(episode::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, episode: NewEpisode) -> Result<Episode, RepositoryError> {
        let model = episode::ActiveModel {
            title: Set(episode.title),
            category: Set(episode.category),
            podcast_id: Set(episode.podcast_id),
            created_at: Set(episode.created_at.into()),
            updated_at: Set(episode.created_at.into()),
            ..Default::default()
        };

        let model = model.insert(self.db.as_ref()).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn save(&self, episode: &Episode) -> Result<Episode, RepositoryError> {
        let mut model: episode::ActiveModel = episode::Entity::find_by_id(episode.id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into();

        model.title = Set(episode.title.clone());
        model.category = Set(episode.category.clone());
        model.podcast_id = Set(episode.podcast_id);
        model.updated_at = Set(episode.updated_at.into());

        let model = model.update(self.db.as_ref()).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        episode::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        Ok(())
    }
}

impl From<episode::Model> for Episode {
    fn from(model: episode::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            category: model.category,
            podcast_id: model.podcast_id,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
