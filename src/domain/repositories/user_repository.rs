// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::user::{NewUser, User, UserCredentials};
use async_trait::async_trait;

/// 用户仓库特质
///
/// 定义用户数据访问接口。读取到的 `User` 携带完整的订阅集合，
/// 但从不包含密码哈希。
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 根据ID查找用户
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError>;

    /// 根据邮箱查找用户
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// 显式读取登录凭据
    async fn find_credentials(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, RepositoryError>;

    /// 首次持久化用户；邮箱重复时返回 `RepositoryError::Conflict`
    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError>;

    /// 覆盖保存用户的邮箱、角色与订阅集合
    ///
    /// # 返回值
    ///
    /// * `Ok(User)` - 保存后的用户
    /// * `Err(RepositoryError::NotFound)` - 用户不存在
    /// * `Err(RepositoryError::Conflict)` - 订阅集合引用了不存在的播客，或邮箱重复
    async fn save(&self, user: &User) -> Result<User, RepositoryError>;

    /// 更新密码哈希
    async fn update_password(&self, id: i32, password_hash: &str) -> Result<(), RepositoryError>;
}
