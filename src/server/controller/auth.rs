use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{CredentialsDto, ProfileDto, RegisteredDto, TokenDto},
    },
    server::{
        error::AppError,
        model::{auth::AuthUser, user::Credentials},
        service::auth::AuthService,
        state::AppState,
        util::json::AppJson,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Validates the email format, hashes the password with bcrypt, and stores the account.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Invalid JSON, invalid email format, or email already registered
/// - `500 Internal Server Error` - Hashing or database error
#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 201, description = "Account created", body = RegisteredDto),
        (status = 400, description = "Invalid JSON, invalid email, or duplicate account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CredentialsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.token_service, state.password_cost);

    let user = service.register(Credentials::from_dto(payload)).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisteredDto {
            message: "User registered successfully".to_string(),
            user_id: user.user_id,
        }),
    ))
}

/// Log in and receive an access token.
///
/// The token is valid for 24 hours and must be sent as `Authorization: Bearer <token>`
/// on every protected endpoint.
///
/// # Returns
/// - `200 OK` - Signed access token
/// - `400 Bad Request` - Invalid JSON or invalid email format
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Hashing, signing, or database error
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Login successful", body = TokenDto),
        (status = 400, description = "Invalid JSON or invalid email", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CredentialsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.token_service, state.password_cost);

    let token = service.login(Credentials::from_dto(payload)).await?;

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            message: "Login successful".to_string(),
            token,
        }),
    ))
}

/// Get the identity carried by the caller's token.
///
/// # Returns
/// - `200 OK` - Account ID and email
/// - `401 Unauthorized` - Missing, invalid, or expired token
#[utoipa::path(
    get,
    path = "/profile",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authenticated identity", body = ProfileDto),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn profile(user: AuthUser) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(user.into_dto())))
}
