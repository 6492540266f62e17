// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::map_db_err;
use crate::domain::models::user::{NewUser, User, UserCredentials, UserRole};
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::{subscription, user};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::collections::BTreeSet;
use std::sync::Arc;

/// 用户仓库实现
///
/// 订阅集合存放在 `subscriptions` 关联表中，`save` 在同一事务内
/// 把关联表同步为用户当前的订阅集合。
#[derive(Clone)]
pub struct UserRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryImpl {
    /// 创建新的用户仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 读取用户的订阅集合
    async fn load_subscriptions<C: ConnectionTrait>(
        conn: &C,
        user_id: i32,
    ) -> Result<BTreeSet<i32>, RepositoryError> {
        let rows = subscription::Entity::find()
            .filter(subscription::Column::UserId.eq(user_id))
            .all(conn)
            .await?;

        Ok(rows.into_iter().map(|row| row.podcast_id).collect())
    }

    /// 把用户模型与订阅集合组装为领域对象
    fn to_domain(model: user::Model, subscriptions: BTreeSet<i32>) -> Result<User, RepositoryError> {
        let role = model.role.parse::<UserRole>().map_err(|_| {
            RepositoryError::Database(DbErr::Custom(format!("Invalid user role: {}", model.role)))
        })?;

        Ok(User {
            id: model.id,
            email: model.email,
            role,
            subscriptions,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }

    async fn hydrate(&self, model: Option<user::Model>) -> Result<Option<User>, RepositoryError> {
        match model {
            Some(model) => {
                let subscriptions = Self::load_subscriptions(self.db.as_ref(), model.id).await?;
                Self::to_domain(model, subscriptions).map(Some)
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        let model = user::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        self.hydrate(model).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await?;
        self.hydrate(model).await
    }

    async fn find_credentials(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, RepositoryError> {
        let row: Option<(i32, String)> = user::Entity::find()
            .select_only()
            .column(user::Column::Id)
            .column(user::Column::Password)
            .filter(user::Column::Email.eq(email))
            .into_tuple()
            .one(self.db.as_ref())
            .await?;

        Ok(row.map(|(user_id, password_hash)| UserCredentials {
            user_id,
            password_hash,
        }))
    }

    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError> {
        let model = user::ActiveModel {
            email: Set(user.email),
            password: Set(user.password_hash),
            role: Set(user.role.to_string()),
            created_at: Set(user.created_at.into()),
            updated_at: Set(user.created_at.into()),
            ..Default::default()
        };

        let model = model.insert(self.db.as_ref()).await.map_err(map_db_err)?;
        Self::to_domain(model, BTreeSet::new())
    }

    async fn save(&self, user: &User) -> Result<User, RepositoryError> {
        let txn = self.db.begin().await?;

        let mut model: user::ActiveModel = user::Entity::find_by_id(user.id)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into();

        model.email = Set(user.email.clone());
        model.role = Set(user.role.to_string());
        model.updated_at = Set(user.updated_at.into());
        let model = model.update(&txn).await.map_err(map_db_err)?;

        let current = Self::load_subscriptions(&txn, user.id).await?;

        let removed: Vec<i32> = current.difference(&user.subscriptions).copied().collect();
        if !removed.is_empty() {
            subscription::Entity::delete_many()
                .filter(subscription::Column::UserId.eq(user.id))
                .filter(subscription::Column::PodcastId.is_in(removed))
                .exec(&txn)
                .await?;
        }

        let added: Vec<subscription::ActiveModel> = user
            .subscriptions
            .difference(&current)
            .map(|podcast_id| subscription::ActiveModel {
                user_id: Set(user.id),
                podcast_id: Set(*podcast_id),
            })
            .collect();
        if !added.is_empty() {
            subscription::Entity::insert_many(added)
                .exec_without_returning(&txn)
                .await
                .map_err(map_db_err)?;
        }

        txn.commit().await?;

        tracing::debug!(
            "Saved user {} with {} subscriptions",
            user.id,
            user.subscriptions.len()
        );
        Self::to_domain(model, user.subscriptions.clone())
    }

    async fn update_password(&self, id: i32, password_hash: &str) -> Result<(), RepositoryError> {
        let mut model: user::ActiveModel = user::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into();

        model.password = Set(password_hash.to_string());
        model.updated_at = Set(Utc::now().into());
        model.update(self.db.as_ref()).await?;
        Ok(())
    }
}
