// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_context, register};
use podcastrs::application::dto::output::{IdPayload, Output};
use podcastrs::domain::models::user::UserRole;

#[tokio::test]
async fn test_create_comment() {
    let ctx = create_test_context().await;
    let listener = register(&ctx, "listener@example.com", UserRole::Listener).await;
    let podcast = ctx.catalog.create_podcast("Podcast One", "Tech").await.unwrap();

    let output = Output::from_result(
        ctx.comments.create_comment(&listener, podcast, "Great show").await,
        |id| IdPayload { id },
    );

    assert!(output.is_ok());
    assert!(output.data.map(|payload| payload.id > 0).unwrap_or(false));
}

#[tokio::test]
async fn test_comment_by_unknown_user_is_rejected() {
    let ctx = create_test_context().await;
    let listener = register(&ctx, "listener@example.com", UserRole::Listener).await;
    let podcast = ctx.catalog.create_podcast("Podcast One", "Tech").await.unwrap();
    let mut ghost = listener.clone();
    ghost.id += 100;

    let output = Output::from_result(
        ctx.comments.create_comment(&ghost, podcast, "Hello").await,
        |id| IdPayload { id },
    );

    assert_eq!(
        serde_json::to_value(&output).unwrap(),
        serde_json::json!({ "ok": false, "error": "Could not create comment" })
    );
}
