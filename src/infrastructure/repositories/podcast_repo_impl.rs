// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::map_db_err;
use crate::domain::models::podcast::{Episode, NewPodcast, Podcast, PodcastDetail};
use crate::domain::repositories::podcast_repository::{PodcastFilter, PodcastRepository};
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::{episode, podcast};
use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::*;
use std::sync::Arc;

/// 转义 LIKE 模式中的通配符，使检索词按字面匹配
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// 播客仓库实现
#[derive(Clone)]
pub struct PodcastRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl PodcastRepositoryImpl {
    /// 创建新的播客仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PodcastRepository for PodcastRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Podcast>, RepositoryError> {
        let models = podcast::Entity::find()
            .order_by_asc(podcast::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Podcast>, RepositoryError> {
        let model = podcast::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_with_episodes(&self, id: i32) -> Result<Option<PodcastDetail>, RepositoryError> {
        let Some(model) = podcast::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
        else {
            return Ok(None);
        };

        let episodes = model
            .find_related(episode::Entity)
            .order_by_asc(episode::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(Some(PodcastDetail {
            podcast: model.into(),
            episodes: episodes.into_iter().map(Episode::from).collect(),
        }))
    }

    async fn find_where(&self, filter: &PodcastFilter) -> Result<Vec<Podcast>, RepositoryError> {
        let mut query = podcast::Entity::find();
        let backend = self.db.get_database_backend();

        // SQLite 的 LOWER/LIKE 只折叠 ASCII，标题条件改为查询后逐行判断
        if let (Some(needle), DbBackend::Postgres) = (&filter.title_contains, backend) {
            let pattern = LikeExpr::new(format!("%{}%", escape_like(needle))).escape('\\');
            query = query.filter(Expr::col(podcast::Column::Title).ilike(pattern));
        }

        if let Some(ref ids) = filter.ids {
            if ids.is_empty() {
                return Ok(Vec::new());
            }
            query = query.filter(podcast::Column::Id.is_in(ids.iter().copied()));
        }

        let models = query
            .order_by_asc(podcast::Column::Id)
            .all(self.db.as_ref())
            .await?;

        let podcasts = models.into_iter().map(Podcast::from);
        Ok(match backend {
            DbBackend::Postgres => podcasts.collect(),
            _ => podcasts.filter(|podcast| filter.matches(podcast)).collect(),
        })
    }

    async fn insert(&self, podcast: NewPodcast) -> Result<Podcast, RepositoryError> {
        let model = podcast::ActiveModel {
            title: Set(podcast.title),
            category: Set(podcast.category),
            rating: Set(None),
            created_at: Set(podcast.created_at.into()),
            updated_at: Set(podcast.created_at.into()),
            ..Default::default()
        };

        let model = model.insert(self.db.as_ref()).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn save(&self, podcast: &Podcast) -> Result<Podcast, RepositoryError> {
        let mut model: podcast::ActiveModel = podcast::Entity::find_by_id(podcast.id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into();

        model.title = Set(podcast.title.clone());
        model.category = Set(podcast.category.clone());
        model.rating = Set(podcast.rating);
        model.updated_at = Set(podcast.updated_at.into());

        let model = model.update(self.db.as_ref()).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        // episodes / comments / subscriptions 的外键均为 ON DELETE CASCADE
        podcast::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        Ok(())
    }
}

impl From<podcast::Model> for Podcast {
    fn from(model: podcast::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            category: model.category,
            rating: model.rating,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
