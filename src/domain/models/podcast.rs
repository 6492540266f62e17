// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 评分下限
pub const MIN_RATING: i32 = 1;
/// 评分上限
pub const MAX_RATING: i32 = 5;

/// 播客实体
///
/// 目录中的顶层条目。剧集与评论通过外键 `podcast_id` 归属于播客，
/// 删除播客时由持久化层级联删除；订阅关系与用户共享，不归属任何一方。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Podcast {
    /// 播客ID，首次持久化后由存储分配
    pub id: i32,
    /// 标题
    pub title: String,
    /// 分类
    pub category: String,
    /// 评分，取值范围 1-5，创建时为空
    pub rating: Option<i32>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

impl Podcast {
    /// 将补丁中出现的字段覆盖到当前播客上
    ///
    /// 未出现在补丁中的字段保持不变。
    pub fn apply(&mut self, patch: PodcastPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(rating) = patch.rating {
            self.rating = Some(rating);
        }
        self.updated_at = Utc::now();
    }
}

/// 尚未持久化的播客
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPodcast {
    pub title: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl NewPodcast {
    /// 在内存中构建新播客，评分为空
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            created_at: Utc::now(),
        }
    }
}

/// 播客更新补丁
///
/// 浅合并语义：`Some` 字段覆盖原值，`None` 字段保持原值。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct PodcastPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5."))]
    pub rating: Option<i32>,
}

/// 播客及其全部剧集
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PodcastDetail {
    #[serde(flatten)]
    pub podcast: Podcast,
    pub episodes: Vec<Episode>,
}

/// 剧集实体
///
/// 只存在于所属播客的生命周期内。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// 剧集ID
    pub id: i32,
    /// 标题
    pub title: String,
    /// 分类
    pub category: String,
    /// 所属播客ID
    pub podcast_id: i32,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

impl Episode {
    /// 将补丁中出现的字段覆盖到当前剧集上
    pub fn apply(&mut self, patch: EpisodePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        self.updated_at = Utc::now();
    }
}

/// 尚未持久化的剧集
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEpisode {
    pub podcast_id: i32,
    pub title: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl NewEpisode {
    pub fn new(podcast_id: i32, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            podcast_id,
            title: title.into(),
            category: category.into(),
            created_at: Utc::now(),
        }
    }
}

/// 剧集更新补丁
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodePatch {
    pub title: Option<String>,
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Podcast {
        let now = Utc::now();
        Podcast {
            id: 1,
            title: "Podcast One".to_string(),
            category: "Tech".to_string(),
            rating: Some(4),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_partial_patch_keeps_unspecified_fields() {
        let mut podcast = sample();
        podcast.apply(PodcastPatch {
            title: Some("Renamed".to_string()),
            ..Default::default()
        });

        assert_eq!(podcast.title, "Renamed");
        assert_eq!(podcast.category, "Tech");
        assert_eq!(podcast.rating, Some(4));
    }

    #[test]
    fn test_rating_patch_validation() {
        for rating in [0, 6, -1] {
            let patch = PodcastPatch {
                rating: Some(rating),
                ..Default::default()
            };
            assert!(patch.validate().is_err(), "rating {} should be rejected", rating);
        }
        for rating in MIN_RATING..=MAX_RATING {
            let patch = PodcastPatch {
                rating: Some(rating),
                ..Default::default()
            };
            assert!(patch.validate().is_ok());
        }
        assert!(PodcastPatch::default().validate().is_ok());
    }
}
