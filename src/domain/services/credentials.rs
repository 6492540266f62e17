// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::ServiceError;
use thiserror::Error;

/// 凭据组件错误类型
#[derive(Error, Debug)]
pub enum CredentialError {
    /// 哈希计算或校验失败
    #[error("Password hashing failed: {0}")]
    Hashing(String),
    /// 令牌签发失败
    #[error("Token issuance failed: {0}")]
    Token(String),
}

impl From<CredentialError> for ServiceError {
    fn from(err: CredentialError) -> Self {
        tracing::error!("Credential fault: {}", err);
        ServiceError::Internal
    }
}

/// 密码哈希特质
///
/// 具体算法由宿主程序提供。
pub trait PasswordHasher: Send + Sync {
    /// 计算密码哈希
    fn hash(&self, password: &str) -> Result<String, CredentialError>;
    /// 校验明文密码与哈希是否匹配
    fn verify(&self, password: &str, hash: &str) -> Result<bool, CredentialError>;
}

/// 令牌签发特质
pub trait TokenIssuer: Send + Sync {
    /// 为用户签发访问令牌
    fn sign(&self, user_id: i32) -> Result<String, CredentialError>;
}
