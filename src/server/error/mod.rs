//! Application errors and their JSON responses.
//!
//! Every handler returns `Result<_, AppError>`. Client-facing failures carry their own
//! message; anything originating in storage, configuration or the runtime is logged and
//! collapsed into a generic 500 body so internals never reach the caller.

pub mod auth;
pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

const GENERIC_ERROR: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or invalid environment configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Registration, login and token failures. These pick their own status codes.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Listener bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// 404 with the given message, e.g. "Guest not found".
    #[error("{0}")]
    NotFound(String),

    /// 400 with the given message.
    #[error("{0}")]
    BadRequest(String),

    /// 409 when the request clashes with existing rows.
    #[error("{0}")]
    Conflict(String),

    /// 500 whose message is logged but never returned.
    #[error("{0}")]
    InternalError(String),
}

/// Malformed or non-JSON request bodies all surface as the same 400 response.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        AppError::BadRequest("Invalid JSON provided".to_string())
    }
}

/// Path segments that fail to parse (e.g. `/guests/abc`) get a JSON 400 too.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Rejected path parameters: {}", rejection.body_text());
        AppError::BadRequest("Invalid path parameter".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(error) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error })).into_response()
            }
            Self::BadRequest(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error })).into_response()
            }
            Self::Conflict(error) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error })).into_response()
            }
            Self::InternalError(msg) => InternalServerError(msg).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs the wrapped error and answers with an opaque 500.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: GENERIC_ERROR.to_string(),
            }),
        )
            .into_response()
    }
}
