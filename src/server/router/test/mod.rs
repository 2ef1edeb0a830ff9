use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{router::router, service::token::TokenService, state::AppState};

mod auth;
mod reservation;

/// Builds the full application router over a test database.
fn app(db: &DatabaseConnection) -> Router {
    let state = AppState::new(
        db.clone(),
        TokenService::new("router-test-secret").unwrap(),
        4,
    );

    router(&state).with_state(state)
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends a request and returns the status with the JSON body (`Null` when empty).
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let res = app.clone().oneshot(request).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

/// Registers an account and logs in, returning the user ID and token.
async fn register_and_login(app: &Router, email: &str) -> (i64, String) {
    let credentials = json!({ "email": email, "password": "correct horse" });

    let (status, body) = send(
        app,
        request(Method::POST, "/register", None, Some(credentials.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let user_id = body["user_id"].as_i64().unwrap();

    let (status, body) = send(
        app,
        request(Method::POST, "/login", None, Some(credentials)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();

    (user_id, token)
}
