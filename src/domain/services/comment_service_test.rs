// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::*;
use crate::domain::models::podcast::NewPodcast;
use crate::domain::models::user::{NewUser, UserRole};
use crate::domain::repositories::comment_repository::CommentFilter;
use crate::infrastructure::repositories::memory_store::InMemoryStore;
use chrono::Utc;
use std::collections::BTreeSet;

fn setup() -> (CommentService, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let service = CommentService::new(store.clone(), store.clone(), store.clone());
    (service, store)
}

fn ghost(id: i32) -> User {
    let now = Utc::now();
    User {
        id,
        email: "ghost@example.com".to_string(),
        role: UserRole::Listener,
        subscriptions: BTreeSet::new(),
        created_at: now,
        updated_at: now,
    }
}

async fn seed(store: &InMemoryStore) -> (i32, User) {
    let podcast = PodcastRepository::insert(store, NewPodcast::new("Podcast One", "Tech"))
        .await
        .unwrap();
    let user = UserRepository::insert(
        store,
        NewUser::new("listener@example.com", "hash", UserRole::Listener),
    )
    .await
    .unwrap();
    (podcast.id, user)
}

#[tokio::test]
async fn test_create_comment_binds_podcast_and_author() {
    let (service, store) = setup();
    let (podcast_id, user) = seed(&store).await;

    let id = service
        .create_comment(&user, podcast_id, "Great show")
        .await
        .unwrap();

    let comment = CommentRepository::find_by_id(store.as_ref(), id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(comment.content, "Great show");
    assert_eq!(comment.podcast_id, podcast_id);
    assert_eq!(comment.user_id, user.id);
}

#[tokio::test]
async fn test_missing_user_yields_combined_error_and_no_record() {
    let (service, store) = setup();
    let (podcast_id, _user) = seed(&store).await;

    let err = service
        .create_comment(&ghost(404), podcast_id, "Hello")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Could not create comment");
    let comments = CommentRepository::find_where(store.as_ref(), &CommentFilter::podcast(podcast_id))
        .await
        .unwrap();
    assert!(comments.is_empty());
}

#[tokio::test]
async fn test_missing_podcast_yields_same_combined_error() {
    let (service, store) = setup();
    let (podcast_id, user) = seed(&store).await;

    let missing_podcast = service
        .create_comment(&user, podcast_id + 1, "Hello")
        .await
        .unwrap_err();
    let missing_both = service
        .create_comment(&ghost(404), podcast_id + 1, "Hello")
        .await
        .unwrap_err();

    assert_eq!(
        missing_podcast,
        ServiceError::CombinedLookup(COULD_NOT_CREATE_COMMENT)
    );
    assert_eq!(missing_podcast, missing_both);
}

#[tokio::test]
async fn test_empty_content_is_accepted() {
    let (service, store) = setup();
    let (podcast_id, user) = seed(&store).await;

    assert!(service.create_comment(&user, podcast_id, "").await.is_ok());
}
