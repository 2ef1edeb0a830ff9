use axum::extract::FromRequestParts;

use crate::server::error::AppError;

/// `axum::extract::Path` with an `AppError` rejection, so bad IDs answer in JSON.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
