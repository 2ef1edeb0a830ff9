use axum::{extract::FromRequestParts, http::Request};

use crate::server::{error::AppError, model::auth::AuthUser};

/// Tests extracting an identity stored by the middleware.
///
/// Expected: Ok(AuthUser) equal to the stored identity
#[tokio::test]
async fn extracts_stored_identity() {
    let stored = AuthUser {
        user_id: 5,
        email: "night@example.com".to_string(),
    };
    let (mut parts, _) = Request::builder()
        .uri("/profile")
        .extension(stored.clone())
        .body(())
        .unwrap()
        .into_parts();

    let user = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();

    assert_eq!(user, stored);
}

/// Tests extracting an identity from a request the middleware never saw.
///
/// Expected: Err(AppError::AuthErr) which renders as 401
#[tokio::test]
async fn rejects_request_without_identity() {
    let (mut parts, _) = Request::builder()
        .uri("/profile")
        .body(())
        .unwrap()
        .into_parts();

    let result = AuthUser::from_request_parts(&mut parts, &()).await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));
}
