// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{ServiceError, ServiceResult, COULD_NOT_CREATE_COMMENT};
use crate::domain::models::comment::NewComment;
use crate::domain::models::user::User;
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::repositories::podcast_repository::PodcastRepository;
use crate::domain::repositories::user_repository::UserRepository;
use std::sync::Arc;

/// 评论服务
pub struct CommentService {
    podcasts: Arc<dyn PodcastRepository>,
    users: Arc<dyn UserRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl CommentService {
    /// 创建新的评论服务实例
    pub fn new(
        podcasts: Arc<dyn PodcastRepository>,
        users: Arc<dyn UserRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            podcasts,
            users,
            comments,
        }
    }

    /// 以当前用户身份评论播客
    ///
    /// 播客与作者都必须存在；任一缺失都只返回同一条
    /// “Could not create comment”，不区分缺的是哪一方。
    ///
    /// # 参数
    ///
    /// * `auth_user` - 已认证的当前用户
    /// * `podcast_id` - 被评论的播客ID
    /// * `content` - 评论内容，不做长度校验
    ///
    /// # 返回值
    ///
    /// * `Ok(i32)` - 新评论ID
    /// * `Err(ServiceError::CombinedLookup)` - 播客或用户不存在
    pub async fn create_comment(
        &self,
        auth_user: &User,
        podcast_id: i32,
        content: &str,
    ) -> ServiceResult<i32> {
        let podcast = self.podcasts.find_by_id(podcast_id).await?;
        let author = self.users.find_by_id(auth_user.id).await?;

        let (podcast, author) = match (podcast, author) {
            (Some(podcast), Some(author)) => (podcast, author),
            _ => {
                tracing::warn!(
                    "Comment rejected: podcast {} or user {} missing",
                    podcast_id,
                    auth_user.id
                );
                return Err(ServiceError::CombinedLookup(COULD_NOT_CREATE_COMMENT));
            }
        };

        let comment = self
            .comments
            .insert(NewComment::new(content, podcast.id, author.id))
            .await?;
        tracing::info!(
            "Comment {} created on podcast {} by user {}",
            comment.id,
            podcast.id,
            author.id
        );
        Ok(comment.id)
    }
}

#[cfg(test)]
#[path = "comment_service_test.rs"]
mod tests;
