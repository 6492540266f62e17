// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::RepositoryError;
use thiserror::Error;
use validator::ValidationErrors;

/// 领域服务模块
///
/// 每个服务只依赖构造时显式传入的仓库接口，服务之间互不调用。
/// 所有操作都返回 `ServiceResult`，持久化层的故障在这里被收敛为
/// 通用的内部错误，不向调用方泄露细节。
pub mod account_service;
pub mod catalog_service;
pub mod comment_service;
pub mod credentials;
pub mod subscription_service;

/// 评论创建失败
pub const COULD_NOT_CREATE_COMMENT: &str = "Could not create comment";
/// 订阅切换失败
pub const COULD_NOT_SUBSCRIBE_PODCAST: &str = "Could not subscribe podcast";
/// 订阅列表查询失败
pub const COULD_NOT_FIND_SUBSCRIPTIONS: &str = "Could not find subscription-podcast";

/// 服务层错误类型
///
/// `Display` 即面向调用方的简短消息。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// 播客不存在
    #[error("Podcast with id {0} not found")]
    PodcastNotFound(i32),
    /// 播客存在，但其中没有该剧集
    #[error("Episode with id {episode_id} not found in podcast with id {podcast_id}")]
    EpisodeNotFound { podcast_id: i32, episode_id: i32 },
    /// 用户不存在
    #[error("User with id {0} not found")]
    UserNotFound(i32),
    /// 输入违反领域约束
    #[error("{0}")]
    Validation(String),
    /// 多个必需引用中至少一个缺失，不区分具体是哪一个
    #[error("{0}")]
    CombinedLookup(&'static str),
    /// 邮箱已被注册
    #[error("There is a user with that email already")]
    EmailTaken,
    /// 登录邮箱不存在
    #[error("User not found")]
    UnknownLogin,
    /// 密码错误
    #[error("Wrong password")]
    WrongPassword,
    /// 持久化层或凭据组件故障
    #[error("Internal server error occurred.")]
    Internal,
}

impl ServiceError {
    /// 是否属于“未找到”类错误
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ServiceError::PodcastNotFound(_)
                | ServiceError::EpisodeNotFound { .. }
                | ServiceError::UserNotFound(_)
        )
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        tracing::error!("Persistence fault: {}", err);
        ServiceError::Internal
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());
        ServiceError::Validation(message)
    }
}

/// 服务层结果类型
pub type ServiceResult<T> = Result<T, ServiceError>;
