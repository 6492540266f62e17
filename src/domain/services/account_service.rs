// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::credentials::{PasswordHasher, TokenIssuer};
use super::{ServiceError, ServiceResult};
use crate::domain::models::user::{
    CreateAccountInput, EditProfileInput, LoginInput, NewUser, User,
};
use crate::domain::repositories::user_repository::UserRepository;
use std::sync::Arc;
use validator::Validate;

/// 账户服务
///
/// 处理注册、登录与个人资料。密码哈希与令牌签发通过特质注入。
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl AccountService {
    /// 创建新的账户服务实例
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// 注册账户
    ///
    /// # 返回值
    ///
    /// * `Ok(i32)` - 新用户ID
    /// * `Err(ServiceError::Validation)` - 邮箱格式错误
    /// * `Err(ServiceError::EmailTaken)` - 邮箱已被注册
    pub async fn create_account(&self, input: CreateAccountInput) -> ServiceResult<i32> {
        input.validate()?;

        if self.users.find_by_email(&input.email).await?.is_some() {
            tracing::warn!("Account creation rejected: {} already registered", input.email);
            return Err(ServiceError::EmailTaken);
        }

        let password_hash = self.hasher.hash(&input.password)?;
        let user = self
            .users
            .insert(NewUser::new(input.email, password_hash, input.role))
            .await?;
        tracing::info!("User {} registered as {}", user.id, user.role);
        Ok(user.id)
    }

    /// 登录并签发令牌
    pub async fn login(&self, input: LoginInput) -> ServiceResult<String> {
        let Some(credentials) = self.users.find_credentials(&input.email).await? else {
            tracing::warn!("Login rejected: unknown email {}", input.email);
            return Err(ServiceError::UnknownLogin);
        };

        if !self
            .hasher
            .verify(&input.password, &credentials.password_hash)?
        {
            tracing::warn!("Login rejected: wrong password for user {}", credentials.user_id);
            return Err(ServiceError::WrongPassword);
        }

        let token = self.tokens.sign(credentials.user_id)?;
        tracing::info!("User {} logged in", credentials.user_id);
        Ok(token)
    }

    /// 查找用户或失败
    pub async fn find_by_id(&self, user_id: i32) -> ServiceResult<User> {
        match self.users.find_by_id(user_id).await? {
            Some(user) => Ok(user),
            None => {
                tracing::warn!("User {} not found", user_id);
                Err(ServiceError::UserNotFound(user_id))
            }
        }
    }

    /// 编辑个人资料
    ///
    /// 只覆盖输入中提供的字段；提供新密码时重新计算哈希。
    pub async fn edit_profile(&self, user_id: i32, input: EditProfileInput) -> ServiceResult<()> {
        let mut user = self.find_by_id(user_id).await?;
        input.validate()?;

        // 哈希失败时不能留下已写入的邮箱
        let password_hash = match input.password {
            Some(ref password) => Some(self.hasher.hash(password)?),
            None => None,
        };

        if let Some(email) = input.email {
            if let Some(owner) = self.users.find_by_email(&email).await? {
                if owner.id != user.id {
                    tracing::warn!("Profile edit rejected: {} already registered", email);
                    return Err(ServiceError::EmailTaken);
                }
            }
            user.email = email;
            user.updated_at = chrono::Utc::now();
            self.users.save(&user).await?;
        }

        if let Some(password_hash) = password_hash {
            self.users.update_password(user.id, &password_hash).await?;
        }

        tracing::info!("User {} profile updated", user.id);
        Ok(())
    }
}

#[cfg(test)]
#[path = "account_service_test.rs"]
mod tests;
