// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::comment::{Comment, NewComment};
use async_trait::async_trait;

/// 评论查询条件
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentFilter {
    /// 所属播客ID
    pub podcast_id: Option<i32>,
    /// 作者用户ID
    pub user_id: Option<i32>,
}

impl CommentFilter {
    pub fn podcast(podcast_id: i32) -> Self {
        Self {
            podcast_id: Some(podcast_id),
            ..Default::default()
        }
    }

    pub fn matches(&self, comment: &Comment) -> bool {
        self.podcast_id.map_or(true, |id| comment.podcast_id == id)
            && self.user_id.map_or(true, |id| comment.user_id == id)
    }
}

/// 评论仓库特质
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// 根据ID查找评论
    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, RepositoryError>;
    /// 按条件查询评论
    async fn find_where(&self, filter: &CommentFilter) -> Result<Vec<Comment>, RepositoryError>;
    /// 首次持久化评论；播客或作者不存在时返回 `RepositoryError::Conflict`
    async fn insert(&self, comment: NewComment) -> Result<Comment, RepositoryError>;
    /// 根据ID删除评论
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
