// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_context, register};
use podcastrs::application::dto::output::{Output, TokenPayload, UserPayload};
use podcastrs::domain::models::user::{EditProfileInput, LoginInput, UserRole};
use podcastrs::domain::services::ServiceError;

#[tokio::test]
async fn test_register_login_and_profile() {
    let ctx = create_test_context().await;
    let host = register(&ctx, "host@example.com", UserRole::Host).await;

    let output = Output::from_result(
        ctx.accounts
            .login(LoginInput {
                email: "host@example.com".to_string(),
                password: "password".to_string(),
            })
            .await,
        |token| TokenPayload { token },
    );
    assert_eq!(
        serde_json::to_value(&output).unwrap(),
        serde_json::json!({ "ok": true, "token": format!("user:{}", host.id) })
    );

    let profile = Output::from_result(ctx.accounts.find_by_id(host.id).await, |user| {
        UserPayload { user }
    });
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["user"]["email"], "host@example.com");
    assert_eq!(json["user"]["role"], "host");
    assert!(json["user"].get("password").is_none());
}

#[tokio::test]
async fn test_duplicate_email_and_profile_edit() {
    let ctx = create_test_context().await;
    let host = register(&ctx, "host@example.com", UserRole::Host).await;
    register(&ctx, "other@example.com", UserRole::Listener).await;

    ctx.accounts
        .edit_profile(
            host.id,
            EditProfileInput {
                email: None,
                password: Some("rotated".to_string()),
            },
        )
        .await
        .unwrap();
    let token = ctx
        .accounts
        .login(LoginInput {
            email: "host@example.com".to_string(),
            password: "rotated".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(token, format!("user:{}", host.id));

    let taken = ctx
        .accounts
        .edit_profile(
            host.id,
            EditProfileInput {
                email: Some("other@example.com".to_string()),
                password: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(taken, ServiceError::EmailTaken);
    assert_eq!(
        ctx.accounts.find_by_id(host.id).await.unwrap().email,
        "host@example.com"
    );
}
