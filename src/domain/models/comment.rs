// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 评论实体
///
/// 归属于某个播客（随播客级联删除），并引用其作者。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// 评论ID
    pub id: i32,
    /// 评论内容
    pub content: String,
    /// 所属播客ID
    pub podcast_id: i32,
    /// 作者用户ID
    pub user_id: i32,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// 尚未持久化的评论
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewComment {
    pub content: String,
    pub podcast_id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

impl NewComment {
    pub fn new(content: impl Into<String>, podcast_id: i32, user_id: i32) -> Self {
        Self {
            content: content.into(),
            podcast_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
