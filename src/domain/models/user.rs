// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// 用户实体
///
/// 不包含密码哈希；哈希只能通过 `UserRepository::find_credentials` 显式读取。
/// 订阅集合保存被订阅播客的ID，与播客之间是多对多的共享关系。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 用户ID
    pub id: i32,
    /// 邮箱，全局唯一
    pub email: String,
    /// 角色
    pub role: UserRole,
    /// 已订阅的播客ID集合
    pub subscriptions: BTreeSet<i32>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 是否已订阅指定播客
    pub fn is_subscribed(&self, podcast_id: i32) -> bool {
        self.subscriptions.contains(&podcast_id)
    }

    /// 翻转对指定播客的订阅状态
    ///
    /// 已订阅则取消，未订阅则加入。返回翻转后是否处于订阅状态。
    pub fn toggle_subscription(&mut self, podcast_id: i32) -> bool {
        let subscribed = if self.subscriptions.remove(&podcast_id) {
            false
        } else {
            self.subscriptions.insert(podcast_id);
            true
        };
        self.updated_at = Utc::now();
        subscribed
    }
}

/// 用户角色枚举
///
/// 只包含可存储的角色；访问守卫中的“任意已登录用户”不是角色。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// 听众
    #[default]
    Listener,
    /// 主播
    Host,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Listener => write!(f, "listener"),
            UserRole::Host => write!(f, "host"),
        }
    }
}

impl FromStr for UserRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "listener" => Ok(UserRole::Listener),
            "host" => Ok(UserRole::Host),
            _ => Err(()),
        }
    }
}

/// 尚未持久化的用户
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    /// 已经过哈希处理的密码
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>, role: UserRole) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
            role,
            created_at: Utc::now(),
        }
    }
}

/// 登录凭据，仅在校验密码时读取
#[derive(Debug, Clone, PartialEq)]
pub struct UserCredentials {
    pub user_id: i32,
    pub password_hash: String,
}

/// 创建账户输入
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAccountInput {
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
}

/// 登录输入
#[derive(Debug, Clone, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// 编辑个人资料输入
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EditProfileInput {
    #[validate(email(message = "Email is invalid"))]
    pub email: Option<String>,
    pub password: Option<String>,
}
