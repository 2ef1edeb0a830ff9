use super::*;

/// Tests the register, login, and profile flow.
///
/// Expected: 201 with a user ID, 200 with a token, 200 with the same identity
#[tokio::test]
async fn registers_logs_in_and_reads_profile() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    let (user_id, token) = register_and_login(&app, "a@b.com").await;

    let (status, body) = send(&app, request(Method::GET, "/profile", Some(&token), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"].as_i64(), Some(user_id));
    assert_eq!(body["email"], "a@b.com");
}

/// Tests registering an email twice.
///
/// Expected: 400 with "Email already exists"
#[tokio::test]
async fn rejects_duplicate_registration() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    register_and_login(&app, "a@b.com").await;

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/register",
            None,
            Some(json!({ "email": "a@b.com", "password": "other" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email already exists");
}

/// Tests registering with a malformed email.
///
/// Expected: 400 with "Invalid email format"
#[tokio::test]
async fn rejects_invalid_email() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/register",
            None,
            Some(json!({ "email": "not-an-email", "password": "pw" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email format");
}

/// Tests sending a body that is not valid JSON.
///
/// Expected: 400 with "Invalid JSON provided"
#[tokio::test]
async fn rejects_invalid_json() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    let req = Request::builder()
        .method(Method::POST)
        .uri("/register")
        .header("content-type", "application/json")
        .body(Body::from("{\"email\":"))
        .unwrap();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid JSON provided");
}

/// Tests that a wrong password and an unknown email produce identical responses.
///
/// Expected: 401 with the same body for both
#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    register_and_login(&app, "a@b.com").await;

    let wrong_password = send(
        &app,
        request(
            Method::POST,
            "/login",
            None,
            Some(json!({ "email": "a@b.com", "password": "wrong" })),
        ),
    )
    .await;
    let unknown_email = send(
        &app,
        request(
            Method::POST,
            "/login",
            None,
            Some(json!({ "email": "nobody@b.com", "password": "correct horse" })),
        ),
    )
    .await;

    assert_eq!(wrong_password.0, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password.1["error"], "Invalid credentials");
}

/// Tests protected routes without a usable token.
///
/// Expected: 401 for a missing header and for a garbage token
#[tokio::test]
async fn rejects_unauthenticated_requests() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    let (status, body) = send(&app, request(Method::GET, "/guests", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Authorization header required");

    let (status, body) = send(
        &app,
        request(Method::GET, "/guests", Some("garbage"), None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or expired token");
}

/// Tests a token signed with a different secret.
///
/// Expected: 401
#[tokio::test]
async fn rejects_token_from_other_secret() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    let foreign = TokenService::new("some-other-secret")
        .unwrap()
        .issue(1, "a@b.com")
        .unwrap();

    let (status, _) = send(&app, request(Method::GET, "/profile", Some(&foreign), None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

/// Tests that the OpenAPI document is public and lists the bearer scheme.
///
/// Expected: 200 with `/reservations` among the paths
#[tokio::test]
async fn serves_openapi_document() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    let (status, body) = send(
        &app,
        request(Method::GET, "/api-docs/openapi.json", None, None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/reservations"].is_object());
    assert!(body["components"]["securitySchemes"]["bearer_auth"].is_object());
}
