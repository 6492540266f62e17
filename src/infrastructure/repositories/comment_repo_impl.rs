// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::map_db_err;
use crate::domain::models::comment::{Comment, NewComment};
use crate::domain::repositories::comment_repository::{CommentFilter, CommentRepository};
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::comment;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 评论仓库实现
#[derive(Clone)]
pub struct CommentRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryImpl {
    /// 创建新的评论仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryImpl {
    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, RepositoryError> {
        let model = comment::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_where(&self, filter: &CommentFilter) -> Result<Vec<Comment>, RepositoryError> {
        let mut query = comment::Entity::find();
        if let Some(podcast_id) = filter.podcast_id {
            query = query.filter(comment::Column::PodcastId.eq(podcast_id));
        }
        if let Some(user_id) = filter.user_id {
            query = query.filter(comment::Column::UserId.eq(user_id));
        }

        let models = query
            .order_by_asc(comment::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, comment: NewComment) -> Result<Comment, RepositoryError> {
        let model = comment::ActiveModel {
            content: Set(comment.content),
            podcast_id: Set(comment.podcast_id),
            user_id: Set(comment.user_id),
            created_at: Set(comment.created_at.into()),
            ..Default::default()
        };

        let model = model.insert(self.db.as_ref()).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        comment::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        Ok(())
    }
}

impl From<comment::Model> for Comment {
    fn from(model: comment::Model) -> Self {
        Self {
            id: model.id,
            content: model.content,
            podcast_id: model.podcast_id,
            user_id: model.user_id,
            created_at: model.created_at.into(),
        }
    }
}
