use axum::extract::FromRequest;

use crate::server::error::AppError;

/// JSON body extractor whose rejection is an `AppError`.
///
/// Behaves like `axum::Json` but turns every body rejection (bad syntax, wrong shape,
/// missing content type) into a 400 with the standard error body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
