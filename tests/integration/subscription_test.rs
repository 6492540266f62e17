// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_context, register};
use podcastrs::application::dto::output::{CoreOutput, Output, PodcastsPayload};
use podcastrs::domain::models::user::UserRole;

#[tokio::test]
async fn test_toggle_round_trip_persists_join_rows() {
    let ctx = create_test_context().await;
    let listener = register(&ctx, "listener@example.com", UserRole::Listener).await;
    let first = ctx.catalog.create_podcast("Podcast One", "Tech").await.unwrap();
    let second = ctx.catalog.create_podcast("Podcast Two", "Tech").await.unwrap();

    ctx.subscriptions.toggle_subscription(&listener, first).await.unwrap();
    ctx.subscriptions.toggle_subscription(&listener, second).await.unwrap();

    let output = Output::from_result(
        ctx.subscriptions.list_subscriptions(listener.id).await,
        |podcasts| PodcastsPayload { podcasts },
    );
    let ids: Vec<i32> = output
        .data
        .map(|payload| payload.podcasts.into_iter().map(|podcast| podcast.id).collect())
        .unwrap_or_default();
    assert_eq!(ids, vec![first, second]);

    ctx.subscriptions.toggle_subscription(&listener, second).await.unwrap();

    let user = ctx.accounts.find_by_id(listener.id).await.unwrap();
    assert!(user.is_subscribed(first));
    assert!(!user.is_subscribed(second));
}

#[tokio::test]
async fn test_subscription_errors_are_combined() {
    let ctx = create_test_context().await;
    let listener = register(&ctx, "listener@example.com", UserRole::Listener).await;

    let toggle = CoreOutput::from(ctx.subscriptions.toggle_subscription(&listener, 404).await);
    assert_eq!(toggle.error.as_deref(), Some("Could not subscribe podcast"));

    let listing = CoreOutput::from(
        ctx.subscriptions
            .list_subscriptions(listener.id + 1)
            .await
            .map(|_| ()),
    );
    assert_eq!(
        listing.error.as_deref(),
        Some("Could not find subscription-podcast")
    );
}
