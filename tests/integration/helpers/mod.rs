// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use migration::{Migrator, MigratorTrait};
use podcastrs::application::context::AppContext;
use podcastrs::config::settings::{DatabaseSettings, LogSettings, Settings};
use podcastrs::domain::models::user::{CreateAccountInput, User, UserRole};
use podcastrs::domain::services::credentials::{CredentialError, PasswordHasher, TokenIssuer};
use podcastrs::infrastructure::database::connection::create_pool;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &str) -> Result<String, CredentialError> {
        Ok(format!("plain${}", password))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, CredentialError> {
        Ok(hash == format!("plain${}", password))
    }
}

pub struct UserIdIssuer;

impl TokenIssuer for UserIdIssuer {
    fn sign(&self, user_id: i32) -> Result<String, CredentialError> {
        Ok(format!("user:{}", user_id))
    }
}

/// 使用内存 SQLite 数据库的测试配置
///
/// 内存库只在单个连接内可见，因此连接池固定为 1 个连接。
pub fn sqlite_settings() -> Settings {
    Settings {
        database: DatabaseSettings {
            url: "sqlite::memory:".to_string(),
            max_connections: Some(1),
            min_connections: Some(1),
            connect_timeout: Some(5),
            idle_timeout: None,
            sql_logging: false,
        },
        log: LogSettings::default(),
    }
}

/// 创建已完成迁移的应用上下文
pub async fn create_test_context() -> AppContext {
    AppContext::connect(
        &sqlite_settings(),
        Arc::new(PlainHasher),
        Arc::new(UserIdIssuer),
    )
    .await
    .expect("failed to build SQLite test context")
}

/// 创建已完成迁移的应用上下文，并返回其共享的数据库连接
///
/// 供需要在服务之外直接检查表内容的测试使用。
pub async fn create_test_database() -> (AppContext, Arc<DatabaseConnection>) {
    let db = create_pool(&sqlite_settings().database)
        .await
        .expect("failed to open SQLite test database");
    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");
    let db = Arc::new(db);

    let ctx = AppContext::from_database(db.clone(), Arc::new(PlainHasher), Arc::new(UserIdIssuer));
    (ctx, db)
}

/// 创建只使用内存存储的应用上下文
pub fn create_memory_context() -> AppContext {
    AppContext::in_memory(Arc::new(PlainHasher), Arc::new(UserIdIssuer))
}

/// 注册一个用户并返回其完整记录
pub async fn register(ctx: &AppContext, email: &str, role: UserRole) -> User {
    let id = ctx
        .accounts
        .create_account(CreateAccountInput {
            email: email.to_string(),
            password: "password".to_string(),
            role,
        })
        .await
        .unwrap();
    ctx.accounts.find_by_id(id).await.unwrap()
}
