// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::comment::{Comment, NewComment};
use crate::domain::models::podcast::{Episode, NewEpisode, NewPodcast, Podcast, PodcastDetail};
use crate::domain::models::user::{NewUser, User, UserCredentials};
use crate::domain::repositories::comment_repository::{CommentFilter, CommentRepository};
use crate::domain::repositories::episode_repository::{EpisodeFilter, EpisodeRepository};
use crate::domain::repositories::podcast_repository::{PodcastFilter, PodcastRepository};
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet};

/// 用户行，密码哈希与用户实体分开保存
#[derive(Debug, Clone)]
struct UserRow {
    user: User,
    password_hash: String,
}

/// 按实体分表的内存数据
#[derive(Debug, Default)]
struct Tables {
    podcasts: BTreeMap<i32, Podcast>,
    episodes: BTreeMap<i32, Episode>,
    comments: BTreeMap<i32, Comment>,
    users: BTreeMap<i32, UserRow>,
    podcast_seq: i32,
    episode_seq: i32,
    comment_seq: i32,
    user_seq: i32,
}

fn next_id(seq: &mut i32) -> i32 {
    *seq += 1;
    *seq
}

impl Tables {
    fn email_taken(&self, email: &str, except: Option<i32>) -> bool {
        self.users
            .values()
            .any(|row| row.user.email == email && Some(row.user.id) != except)
    }
}

/// 内存仓库实现
///
/// 每种实体一张以ID为键的表，关系只以外键ID表示。
/// 删除播客时在这里显式执行级联：剧集、评论、以及所有用户订阅集合中的该播客ID。
/// 插入时检查外键与邮箱唯一性，违反时返回 `RepositoryError::Conflict`。
///
/// 锁只在同步代码段内持有，单次调用内的操作是原子的。
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// 创建空的内存仓库
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PodcastRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Podcast>, RepositoryError> {
        Ok(self.tables.read().podcasts.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Podcast>, RepositoryError> {
        Ok(self.tables.read().podcasts.get(&id).cloned())
    }

    async fn find_with_episodes(&self, id: i32) -> Result<Option<PodcastDetail>, RepositoryError> {
        let tables = self.tables.read();
        let Some(podcast) = tables.podcasts.get(&id).cloned() else {
            return Ok(None);
        };
        let episodes = tables
            .episodes
            .values()
            .filter(|episode| episode.podcast_id == id)
            .cloned()
            .collect();
        Ok(Some(PodcastDetail { podcast, episodes }))
    }

    async fn find_where(&self, filter: &PodcastFilter) -> Result<Vec<Podcast>, RepositoryError> {
        Ok(self
            .tables
            .read()
            .podcasts
            .values()
            .filter(|podcast| filter.matches(podcast))
            .cloned()
            .collect())
    }

    async fn insert(&self, podcast: NewPodcast) -> Result<Podcast, RepositoryError> {
        let mut tables = self.tables.write();
        let id = next_id(&mut tables.podcast_seq);
        let podcast = Podcast {
            id,
            title: podcast.title,
            category: podcast.category,
            rating: None,
            created_at: podcast.created_at,
            updated_at: podcast.created_at,
        };
        tables.podcasts.insert(id, podcast.clone());
        Ok(podcast)
    }

    async fn save(&self, podcast: &Podcast) -> Result<Podcast, RepositoryError> {
        let mut tables = self.tables.write();
        let slot = tables
            .podcasts
            .get_mut(&podcast.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = podcast.clone();
        Ok(podcast.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write();
        if tables.podcasts.remove(&id).is_none() {
            return Ok(());
        }
        tables.episodes.retain(|_, episode| episode.podcast_id != id);
        tables.comments.retain(|_, comment| comment.podcast_id != id);
        for row in tables.users.values_mut() {
            row.user.subscriptions.remove(&id);
        }
        Ok(())
    }
}

#[async_trait]
impl EpisodeRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Episode>, RepositoryError> {
        Ok(self.tables.read().episodes.get(&id).cloned())
    }

    async fn find_where(&self, filter: &EpisodeFilter) -> Result<Vec<Episode>, RepositoryError> {
        Ok(self
            .tables
            .read()
            .episodes
            .values()
            .filter(|episode| filter.matches(episode))
            .cloned()
            .collect())
    }

    async fn insert(&self, episode: NewEpisode) -> Result<Episode, RepositoryError> {
        let mut tables = self.tables.write();
        if !tables.podcasts.contains_key(&episode.podcast_id) {
            return Err(RepositoryError::Conflict(format!(
                "episode references missing podcast {}",
                episode.podcast_id
            )));
        }
        let id = next_id(&mut tables.episode_seq);
        let episode = Episode {
            id,
            title: episode.title,
            category: episode.category,
            podcast_id: episode.podcast_id,
            created_at: episode.created_at,
            updated_at: episode.created_at,
        };
        tables.episodes.insert(id, episode.clone());
        Ok(episode)
    }

    async fn save(&self, episode: &Episode) -> Result<Episode, RepositoryError> {
        let mut tables = self.tables.write();
        if !tables.podcasts.contains_key(&episode.podcast_id) {
            return Err(RepositoryError::Conflict(format!(
                "episode references missing podcast {}",
                episode.podcast_id
            )));
        }
        let slot = tables
            .episodes
            .get_mut(&episode.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = episode.clone();
        Ok(episode.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        self.tables.write().episodes.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, RepositoryError> {
        Ok(self.tables.read().comments.get(&id).cloned())
    }

    async fn find_where(&self, filter: &CommentFilter) -> Result<Vec<Comment>, RepositoryError> {
        Ok(self
            .tables
            .read()
            .comments
            .values()
            .filter(|comment| filter.matches(comment))
            .cloned()
            .collect())
    }

    async fn insert(&self, comment: NewComment) -> Result<Comment, RepositoryError> {
        let mut tables = self.tables.write();
        if !tables.podcasts.contains_key(&comment.podcast_id) {
            return Err(RepositoryError::Conflict(format!(
                "comment references missing podcast {}",
                comment.podcast_id
            )));
        }
        if !tables.users.contains_key(&comment.user_id) {
            return Err(RepositoryError::Conflict(format!(
                "comment references missing user {}",
                comment.user_id
            )));
        }
        let id = next_id(&mut tables.comment_seq);
        let comment = Comment {
            id,
            content: comment.content,
            podcast_id: comment.podcast_id,
            user_id: comment.user_id,
            created_at: comment.created_at,
        };
        tables.comments.insert(id, comment.clone());
        Ok(comment)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        self.tables.write().comments.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        Ok(self.tables.read().users.get(&id).map(|row| row.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .tables
            .read()
            .users
            .values()
            .find(|row| row.user.email == email)
            .map(|row| row.user.clone()))
    }

    async fn find_credentials(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, RepositoryError> {
        Ok(self
            .tables
            .read()
            .users
            .values()
            .find(|row| row.user.email == email)
            .map(|row| UserCredentials {
                user_id: row.user.id,
                password_hash: row.password_hash.clone(),
            }))
    }

    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut tables = self.tables.write();
        if tables.email_taken(&user.email, None) {
            return Err(RepositoryError::Conflict(format!(
                "email {} already registered",
                user.email
            )));
        }
        let id = next_id(&mut tables.user_seq);
        let row = UserRow {
            user: User {
                id,
                email: user.email,
                role: user.role,
                subscriptions: BTreeSet::new(),
                created_at: user.created_at,
                updated_at: user.created_at,
            },
            password_hash: user.password_hash,
        };
        let created = row.user.clone();
        tables.users.insert(id, row);
        Ok(created)
    }

    async fn save(&self, user: &User) -> Result<User, RepositoryError> {
        let mut tables = self.tables.write();
        if !tables.users.contains_key(&user.id) {
            return Err(RepositoryError::NotFound);
        }
        if tables.email_taken(&user.email, Some(user.id)) {
            return Err(RepositoryError::Conflict(format!(
                "email {} already registered",
                user.email
            )));
        }
        if let Some(missing) = user
            .subscriptions
            .iter()
            .find(|id| !tables.podcasts.contains_key(*id))
        {
            return Err(RepositoryError::Conflict(format!(
                "subscription references missing podcast {}",
                missing
            )));
        }
        let row = tables
            .users
            .get_mut(&user.id)
            .ok_or(RepositoryError::NotFound)?;
        row.user = user.clone();
        Ok(user.clone())
    }

    async fn update_password(&self, id: i32, password_hash: &str) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write();
        let row = tables.users.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        row.password_hash = password_hash.to_string();
        row.user.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::user::UserRole;

    #[tokio::test]
    async fn test_podcast_delete_cascades() {
        let store = InMemoryStore::new();
        let podcast = PodcastRepository::insert(&store, NewPodcast::new("Podcast One", "Tech"))
            .await
            .unwrap();
        let other = PodcastRepository::insert(&store, NewPodcast::new("Radio", "News"))
            .await
            .unwrap();
        let user = UserRepository::insert(
            &store,
            NewUser::new("a@example.com", "hash", UserRole::Listener),
        )
        .await
        .unwrap();

        EpisodeRepository::insert(&store, NewEpisode::new(podcast.id, "E1", "Tech"))
            .await
            .unwrap();
        EpisodeRepository::insert(&store, NewEpisode::new(other.id, "E2", "News"))
            .await
            .unwrap();
        CommentRepository::insert(&store, NewComment::new("nice", podcast.id, user.id))
            .await
            .unwrap();

        let mut listener = user.clone();
        listener.subscriptions.insert(podcast.id);
        listener.subscriptions.insert(other.id);
        UserRepository::save(&store, &listener).await.unwrap();

        PodcastRepository::delete(&store, podcast.id).await.unwrap();

        let episodes = EpisodeRepository::find_where(&store, &EpisodeFilter::default())
            .await
            .unwrap();
        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].podcast_id, other.id);
        assert!(CommentRepository::find_where(&store, &CommentFilter::podcast(podcast.id))
            .await
            .unwrap()
            .is_empty());
        let reloaded = UserRepository::find_by_id(&store, user.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reloaded.subscriptions, BTreeSet::from([other.id]));
    }

    #[tokio::test]
    async fn test_foreign_keys_and_unique_email_are_enforced() {
        let store = InMemoryStore::new();

        let orphan = EpisodeRepository::insert(&store, NewEpisode::new(42, "E", "C")).await;
        assert!(matches!(orphan, Err(RepositoryError::Conflict(_))));

        UserRepository::insert(&store, NewUser::new("dup@example.com", "h", UserRole::Host))
            .await
            .unwrap();
        let duplicate =
            UserRepository::insert(&store, NewUser::new("dup@example.com", "h", UserRole::Host))
                .await;
        assert!(matches!(duplicate, Err(RepositoryError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_ids_are_assigned_on_insert() {
        let store = InMemoryStore::new();
        let first = PodcastRepository::insert(&store, NewPodcast::new("A", "x"))
            .await
            .unwrap();
        let second = PodcastRepository::insert(&store, NewPodcast::new("B", "x"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.rating, None);
    }
}
