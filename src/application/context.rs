// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::repositories::episode_repository::EpisodeRepository;
use crate::domain::repositories::podcast_repository::PodcastRepository;
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::services::account_service::AccountService;
use crate::domain::services::catalog_service::CatalogService;
use crate::domain::services::comment_service::CommentService;
use crate::domain::services::credentials::{PasswordHasher, TokenIssuer};
use crate::domain::services::subscription_service::SubscriptionService;
use crate::infrastructure::database::connection;
use crate::infrastructure::repositories::comment_repo_impl::CommentRepositoryImpl;
use crate::infrastructure::repositories::episode_repo_impl::EpisodeRepositoryImpl;
use crate::infrastructure::repositories::memory_store::InMemoryStore;
use crate::infrastructure::repositories::podcast_repo_impl::PodcastRepositoryImpl;
use crate::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// 应用上下文
///
/// 持有每个领域服务的唯一实例。服务之间互不调用，只共享持久化端口。
#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<CatalogService>,
    pub comments: Arc<CommentService>,
    pub subscriptions: Arc<SubscriptionService>,
    pub accounts: Arc<AccountService>,
}

impl AppContext {
    /// 基于给定的持久化端口组装服务
    pub fn from_ports(
        podcasts: Arc<dyn PodcastRepository>,
        episodes: Arc<dyn EpisodeRepository>,
        comments: Arc<dyn CommentRepository>,
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(podcasts.clone(), episodes)),
            comments: Arc::new(CommentService::new(
                podcasts.clone(),
                users.clone(),
                comments,
            )),
            subscriptions: Arc::new(SubscriptionService::new(podcasts, users.clone())),
            accounts: Arc::new(AccountService::new(users, hasher, issuer)),
        }
    }

    /// 连接数据库、执行迁移并装配基于 SeaORM 的服务
    ///
    /// # 参数
    ///
    /// * `settings` - 应用配置
    /// * `hasher` - 密码哈希实现
    /// * `issuer` - 令牌签发实现
    pub async fn connect(
        settings: &Settings,
        hasher: Arc<dyn PasswordHasher>,
        issuer: Arc<dyn TokenIssuer>,
    ) -> anyhow::Result<Self> {
        let db = connection::create_pool(&settings.database).await?;
        let db = Arc::new(db);

        tracing::info!("Running database migrations...");
        Migrator::up(db.as_ref(), None).await?;
        tracing::info!("Database migrations completed");

        Ok(Self::from_database(db, hasher, issuer))
    }

    /// 基于已迁移的数据库连接装配 SeaORM 实现
    pub fn from_database(
        db: Arc<DatabaseConnection>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self::from_ports(
            Arc::new(PodcastRepositoryImpl::new(db.clone())),
            Arc::new(EpisodeRepositoryImpl::new(db.clone())),
            Arc::new(CommentRepositoryImpl::new(db.clone())),
            Arc::new(UserRepositoryImpl::new(db)),
            hasher,
            issuer,
        )
    }

    /// 装配共享同一个内存存储的服务
    pub fn in_memory(hasher: Arc<dyn PasswordHasher>, issuer: Arc<dyn TokenIssuer>) -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::from_ports(
            store.clone(),
            store.clone(),
            store.clone(),
            store,
            hasher,
            issuer,
        )
    }
}
