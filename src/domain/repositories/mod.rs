// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::DbErr;
use thiserror::Error;

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 播客仓库（podcast_repository）：播客的查询、标题检索与级联删除
/// - 剧集仓库（episode_repository）：按播客归属管理剧集
/// - 评论仓库（comment_repository）：评论的持久化
/// - 用户仓库（user_repository）：账户、凭据与订阅集合
///
/// 所有实现都必须保证：删除播客时级联删除其剧集、评论以及引用它的订阅关系。
pub mod comment_repository;
pub mod episode_repository;
pub mod podcast_repository;
pub mod user_repository;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 违反唯一约束或外键约束
    #[error("Constraint violation: {0}")]
    Conflict(String),
}
