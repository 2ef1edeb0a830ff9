use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    /// Email does not look like `local@domain.tld`.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid email format")]
    InvalidEmail,

    /// Registration attempted with an email that already has an account.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Email already exists")]
    DuplicateAccount,

    /// Unknown email or wrong password.
    ///
    /// Both cases share this variant so clients cannot tell which one occurred.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Protected route called without an `Authorization` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Authorization header required")]
    MissingAuthorization,

    /// `Authorization` header contains bytes that are not visible ASCII.
    #[error("Authorization header is not valid ASCII")]
    MalformedAuthorization,

    /// Token is malformed or its signature does not match the signing secret.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Token rejected: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// Token signature is valid but its expiration instant has passed.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Token expired")]
    TokenExpired,

    /// bcrypt failed to hash or verify a password.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Signing a freshly minted token failed.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Failed to sign token: {0}")]
    TokenSigning(#[source] jsonwebtoken::errors::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and client-facing messages:
/// - `InvalidEmail` / `DuplicateAccount` → 400 Bad Request
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid credentials"
/// - `MissingAuthorization` → 401 Unauthorized with "Authorization header required"
/// - `MalformedAuthorization` / `InvalidToken` / `TokenExpired` → 401 Unauthorized with
///   "Invalid or expired token"
/// - `PasswordHash` / `TokenSigning` → 500 Internal Server Error with generic message
///
/// Token rejections are logged at debug level with their reason while the client only
/// sees the generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidEmail | Self::DuplicateAccount => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials | Self::MissingAuthorization => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::MalformedAuthorization | Self::InvalidToken(_) | Self::TokenExpired => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Invalid or expired token".to_string(),
                    }),
                )
                    .into_response()
            }
            err @ (Self::PasswordHash(_) | Self::TokenSigning(_)) => {
                InternalServerError(err).into_response()
            }
        }
    }
}
