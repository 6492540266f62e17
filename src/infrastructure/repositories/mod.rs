// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供领域仓库接口的具体实现：基于 SeaORM 的数据库实现，
/// 以及供测试与嵌入式场景使用的内存实现。
pub mod comment_repo_impl;
pub mod episode_repo_impl;
pub mod memory_store;
pub mod podcast_repo_impl;
pub mod user_repo_impl;

use crate::domain::repositories::RepositoryError;
use sea_orm::{DbErr, SqlErr};

/// 将数据库错误映射为仓库错误
///
/// 唯一约束与外键约束冲突映射为 `Conflict`，其余保持为 `Database`。
pub(crate) fn map_db_err(err: DbErr) -> RepositoryError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail))
        | Some(SqlErr::ForeignKeyConstraintViolation(detail)) => RepositoryError::Conflict(detail),
        _ => RepositoryError::Database(err),
    }
}
