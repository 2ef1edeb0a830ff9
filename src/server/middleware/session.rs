//! Access to the authenticated caller from handlers.
//!
//! The identity lives in the request extensions only, so it is dropped together with the
//! request and never shared across requests.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::AuthUser,
};

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    /// Reads the identity stored by `require_auth`.
    ///
    /// A handler mounted outside the protected router sees no identity and rejects with
    /// 401.
    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AuthError::MissingAuthorization.into())
    }
}
