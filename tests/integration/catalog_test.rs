// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_memory_context, create_test_context, create_test_database, register};
use podcastrs::application::context::AppContext;
use podcastrs::application::dto::output::{CoreOutput, EpisodePayload, Output, PodcastPayload};
use podcastrs::domain::models::podcast::{EpisodePatch, PodcastPatch};
use podcastrs::domain::models::user::UserRole;
use podcastrs::domain::repositories::comment_repository::{CommentFilter, CommentRepository};
use podcastrs::domain::repositories::episode_repository::{EpisodeFilter, EpisodeRepository};
use podcastrs::domain::services::ServiceError;
use podcastrs::infrastructure::repositories::comment_repo_impl::CommentRepositoryImpl;
use podcastrs::infrastructure::repositories::episode_repo_impl::EpisodeRepositoryImpl;

#[tokio::test]
async fn test_podcast_lifecycle() {
    let ctx = create_test_context().await;

    let id = ctx
        .catalog
        .create_podcast("Podcast One", "Tech")
        .await
        .unwrap();
    ctx.catalog
        .update_podcast(
            id,
            PodcastPatch {
                rating: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    ctx.catalog
        .update_podcast(
            id,
            PodcastPatch {
                title: Some("Podcast Uno".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let podcast = ctx.catalog.get_podcast(id).await.unwrap().podcast;
    assert_eq!(podcast.title, "Podcast Uno");
    assert_eq!(podcast.category, "Tech");
    assert_eq!(podcast.rating, Some(3));

    for rating in [0, 6] {
        let output = CoreOutput::from(
            ctx.catalog
                .update_podcast(
                    id,
                    PodcastPatch {
                        rating: Some(rating),
                        ..Default::default()
                    },
                )
                .await,
        );
        assert!(!output.ok);
        assert_eq!(output.error.as_deref(), Some("Rating must be between 1 and 5."));
    }
    assert_eq!(
        ctx.catalog.get_podcast(id).await.unwrap().podcast.rating,
        Some(3)
    );

    ctx.catalog.delete_podcast(id).await.unwrap();
    let output = Output::from_result(ctx.catalog.get_podcast(id).await, |podcast| {
        PodcastPayload { podcast }
    });
    assert!(!output.is_ok());
    assert_eq!(
        output.error(),
        Some(format!("Podcast with id {} not found", id).as_str())
    );
}

#[tokio::test]
async fn test_search_is_case_insensitive_and_literal() {
    let ctx = create_test_context().await;
    let one = ctx.catalog.create_podcast("Podcast One", "Tech").await.unwrap();
    let loud = ctx.catalog.create_podcast("PODCASTING", "Talk").await.unwrap();
    ctx.catalog.create_podcast("Radio", "Music").await.unwrap();
    let percent = ctx.catalog.create_podcast("100% Rock", "Music").await.unwrap();

    let found: Vec<i32> = ctx
        .catalog
        .search_podcasts("cast")
        .await
        .unwrap()
        .into_iter()
        .map(|podcast| podcast.id)
        .collect();
    assert_eq!(found, vec![one, loud]);

    let literal: Vec<i32> = ctx
        .catalog
        .search_podcasts("0%")
        .await
        .unwrap()
        .into_iter()
        .map(|podcast| podcast.id)
        .collect();
    assert_eq!(literal, vec![percent]);

    assert!(ctx.catalog.search_podcasts("_").await.unwrap().is_empty());
}

async fn search_ids(ctx: &AppContext, needle: &str) -> Vec<i32> {
    ctx.catalog
        .search_podcasts(needle)
        .await
        .unwrap()
        .into_iter()
        .map(|podcast| podcast.id)
        .collect()
}

#[tokio::test]
async fn test_search_folds_non_ascii_case_like_memory_store() {
    let sqlite = create_test_context().await;
    let memory = create_memory_context();

    for ctx in [&sqlite, &memory] {
        let ecole = ctx.catalog.create_podcast("ÉCOLE Radio", "Talk").await.unwrap();
        let strasse = ctx.catalog.create_podcast("Große Straße", "Talk").await.unwrap();
        ctx.catalog.create_podcast("Radio", "Music").await.unwrap();

        assert_eq!(search_ids(ctx, "école").await, vec![ecole]);
        assert_eq!(search_ids(ctx, "GROSSE").await, Vec::<i32>::new());
        assert_eq!(search_ids(ctx, "straße").await, vec![strasse]);
        assert_eq!(search_ids(ctx, "radio").await.len(), 2);
    }
}

#[tokio::test]
async fn test_delete_podcast_cascades() {
    let (ctx, db) = create_test_database().await;
    let host = register(&ctx, "host@example.com", UserRole::Host).await;
    let id = ctx.catalog.create_podcast("Podcast One", "Tech").await.unwrap();
    let first = ctx.catalog.create_episode(id, "Ep 1", "Tech").await.unwrap();
    ctx.catalog.create_episode(id, "Ep 2", "Tech").await.unwrap();
    for n in 0..3 {
        ctx.comments
            .create_comment(&host, id, &format!("comment {}", n))
            .await
            .unwrap();
    }
    ctx.subscriptions.toggle_subscription(&host, id).await.unwrap();
    assert_eq!(ctx.catalog.list_episodes(id).await.unwrap().len(), 2);

    ctx.catalog.delete_podcast(id).await.unwrap();

    let episodes = EpisodeRepositoryImpl::new(db.clone())
        .find_where(&EpisodeFilter::podcast(id))
        .await
        .unwrap();
    let comments = CommentRepositoryImpl::new(db)
        .find_where(&CommentFilter::podcast(id))
        .await
        .unwrap();
    assert!(episodes.is_empty());
    assert!(comments.is_empty());
    assert_eq!(
        ctx.catalog.get_episode(id, first).await.unwrap_err(),
        ServiceError::PodcastNotFound(id)
    );
    assert!(ctx
        .subscriptions
        .list_subscriptions(host.id)
        .await
        .unwrap()
        .is_empty());
    assert!(ctx.accounts.find_by_id(host.id).await.unwrap().subscriptions.is_empty());
}

#[tokio::test]
async fn test_episode_lifecycle_and_not_found_tiers() {
    let ctx = create_test_context().await;
    let id = ctx.catalog.create_podcast("Podcast One", "Tech").await.unwrap();
    let episode_id = ctx.catalog.create_episode(id, "Pilot", "Tech").await.unwrap();

    ctx.catalog
        .update_episode(
            id,
            episode_id,
            EpisodePatch {
                category: Some("Science".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let output = Output::from_result(ctx.catalog.get_episode(id, episode_id).await, |episode| {
        EpisodePayload { episode }
    });
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["ok"], true);
    assert_eq!(json["episode"]["title"], "Pilot");
    assert_eq!(json["episode"]["category"], "Science");

    let missing_episode = ctx.catalog.get_episode(id, episode_id + 1).await.unwrap_err();
    let missing_podcast = ctx.catalog.get_episode(id + 1, episode_id).await.unwrap_err();
    assert!(matches!(missing_episode, ServiceError::EpisodeNotFound { .. }));
    assert!(matches!(missing_podcast, ServiceError::PodcastNotFound(_)));

    ctx.catalog.delete_episode(id, episode_id).await.unwrap();
    assert!(ctx.catalog.list_episodes(id).await.unwrap().is_empty());
}
