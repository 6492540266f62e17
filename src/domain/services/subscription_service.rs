// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{ServiceError, ServiceResult, COULD_NOT_FIND_SUBSCRIPTIONS, COULD_NOT_SUBSCRIBE_PODCAST};
use crate::domain::models::podcast::Podcast;
use crate::domain::models::user::User;
use crate::domain::repositories::podcast_repository::{PodcastFilter, PodcastRepository};
use crate::domain::repositories::user_repository::UserRepository;
use std::sync::Arc;

/// 订阅服务
///
/// 订阅只是用户与播客之间的集合成员关系，没有独立的订阅记录。
/// 每个（用户，播客）对只有“未订阅”“已订阅”两个状态，唯一的转换是翻转。
///
/// 并发的两次翻转不会被串行化：两个请求可能读到同一份订阅集合，
/// 后写入者覆盖前者。
pub struct SubscriptionService {
    podcasts: Arc<dyn PodcastRepository>,
    users: Arc<dyn UserRepository>,
}

impl SubscriptionService {
    /// 创建新的订阅服务实例
    pub fn new(podcasts: Arc<dyn PodcastRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { podcasts, users }
    }

    /// 翻转当前用户对播客的订阅
    ///
    /// 会重新读取用户以获得最新的订阅集合。已订阅则取消，未订阅则加入；
    /// 连续调用两次会回到原状态。结果状态不返回，调用方需重新查询。
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 翻转成功
    /// * `Err(ServiceError::CombinedLookup)` - 播客或用户不存在
    pub async fn toggle_subscription(&self, auth_user: &User, podcast_id: i32) -> ServiceResult<()> {
        let podcast = self.podcasts.find_by_id(podcast_id).await?;
        let listener = self.users.find_by_id(auth_user.id).await?;

        let (podcast, mut listener) = match (podcast, listener) {
            (Some(podcast), Some(listener)) => (podcast, listener),
            _ => {
                tracing::warn!(
                    "Subscription toggle rejected: podcast {} or user {} missing",
                    podcast_id,
                    auth_user.id
                );
                return Err(ServiceError::CombinedLookup(COULD_NOT_SUBSCRIBE_PODCAST));
            }
        };

        let subscribed = listener.toggle_subscription(podcast.id);
        self.users.save(&listener).await?;

        if subscribed {
            tracing::info!("User {} subscribed to podcast {}", listener.id, podcast.id);
        } else {
            tracing::info!("User {} unsubscribed from podcast {}", listener.id, podcast.id);
        }
        Ok(())
    }

    /// 查询用户订阅的全部播客
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<Podcast>)` - 订阅的播客，不分页
    /// * `Err(ServiceError::CombinedLookup)` - 用户不存在
    pub async fn list_subscriptions(&self, user_id: i32) -> ServiceResult<Vec<Podcast>> {
        let Some(listener) = self.users.find_by_id(user_id).await? else {
            tracing::warn!("Subscriptions requested for missing user {}", user_id);
            return Err(ServiceError::CombinedLookup(COULD_NOT_FIND_SUBSCRIPTIONS));
        };

        if listener.subscriptions.is_empty() {
            return Ok(Vec::new());
        }

        let podcasts = self
            .podcasts
            .find_where(&PodcastFilter::ids(listener.subscriptions.iter().copied()))
            .await?;
        tracing::debug!("User {} has {} subscriptions", user_id, podcasts.len());
        Ok(podcasts)
    }
}

#[cfg(test)]
#[path = "subscription_service_test.rs"]
mod tests;
