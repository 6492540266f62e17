// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::podcast::{NewPodcast, Podcast, PodcastDetail};
use async_trait::async_trait;

/// 播客查询条件
///
/// 各条件之间为“与”关系；全部为空时匹配所有播客。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PodcastFilter {
    /// 标题包含该子串（按 Unicode 规则不区分大小写，通配符按字面匹配）
    pub title_contains: Option<String>,
    /// ID 属于该集合
    pub ids: Option<Vec<i32>>,
}

impl PodcastFilter {
    /// 按标题子串检索
    pub fn title_contains(needle: impl Into<String>) -> Self {
        Self {
            title_contains: Some(needle.into()),
            ..Default::default()
        }
    }

    /// 按ID集合检索
    pub fn ids(ids: impl IntoIterator<Item = i32>) -> Self {
        Self {
            ids: Some(ids.into_iter().collect()),
            ..Default::default()
        }
    }

    /// 判断播客是否满足条件
    ///
    /// 供内存实现使用，数据库实现会把同样的语义翻译成SQL。
    pub fn matches(&self, podcast: &Podcast) -> bool {
        if let Some(ref needle) = self.title_contains {
            if !podcast
                .title
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        if let Some(ref ids) = self.ids {
            if !ids.contains(&podcast.id) {
                return false;
            }
        }
        true
    }
}

/// 播客仓库特质
///
/// 定义播客数据访问接口
#[async_trait]
pub trait PodcastRepository: Send + Sync {
    /// 查询全部播客
    async fn find_all(&self) -> Result<Vec<Podcast>, RepositoryError>;

    /// 根据ID查找播客
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(Podcast))` - 找到播客
    /// * `Ok(None)` - 播客不存在
    /// * `Err(RepositoryError)` - 查询失败
    async fn find_by_id(&self, id: i32) -> Result<Option<Podcast>, RepositoryError>;

    /// 根据ID查找播客，并同时加载其全部剧集
    async fn find_with_episodes(&self, id: i32) -> Result<Option<PodcastDetail>, RepositoryError>;

    /// 按条件查询播客
    async fn find_where(&self, filter: &PodcastFilter) -> Result<Vec<Podcast>, RepositoryError>;

    /// 首次持久化播客并分配ID
    async fn insert(&self, podcast: NewPodcast) -> Result<Podcast, RepositoryError>;

    /// 覆盖保存已有播客
    ///
    /// 播客不存在时返回 `RepositoryError::NotFound`
    async fn save(&self, podcast: &Podcast) -> Result<Podcast, RepositoryError>;

    /// 删除播客
    ///
    /// 必须级联删除其剧集、评论以及所有订阅关系
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn podcast(id: i32, title: &str) -> Podcast {
        Podcast {
            id,
            title: title.to_string(),
            category: "Talk".to_string(),
            rating: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_title_filter_is_case_insensitive_substring() {
        let filter = PodcastFilter::title_contains("cast");

        assert!(filter.matches(&podcast(1, "Podcast One")));
        assert!(filter.matches(&podcast(2, "PODCASTING")));
        assert!(!filter.matches(&podcast(3, "Radio")));
    }

    #[test]
    fn test_title_filter_folds_non_ascii_case() {
        let filter = PodcastFilter::title_contains("école");

        assert!(filter.matches(&podcast(1, "ÉCOLE Radio")));
        assert!(!filter.matches(&podcast(2, "Ecole Radio")));
        assert!(PodcastFilter::title_contains("100%").matches(&podcast(3, "100% Rock")));
        assert!(!PodcastFilter::title_contains("1_0").matches(&podcast(4, "100 Rock")));
    }

    #[test]
    fn test_filters_combine() {
        let filter = PodcastFilter {
            title_contains: Some("one".to_string()),
            ids: Some(vec![1, 2]),
        };

        assert!(filter.matches(&podcast(1, "Podcast One")));
        assert!(!filter.matches(&podcast(4, "Podcast One")));
        assert!(PodcastFilter::default().matches(&podcast(9, "Radio")));
    }
}
