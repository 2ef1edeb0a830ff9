use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::AuthUser,
    service::token::TokenService,
    state::AppState,
};

const BEARER_PREFIX: &str = "Bearer ";

/// Authenticates a request from its `Authorization` header.
pub struct AuthGuard<'a> {
    token_service: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(token_service: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            token_service,
            headers,
        }
    }

    /// Requires a valid access token.
    ///
    /// The `Bearer ` prefix is optional; a bare token is accepted as well.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Identity carried by the token
    /// - `Err(AuthError::MissingAuthorization)` - No `Authorization` header
    /// - `Err(AuthError::MalformedAuthorization)` - Header value is not visible ASCII
    /// - `Err(AuthError::InvalidToken | AuthError::TokenExpired)` - Token rejected
    pub fn require(&self) -> Result<AuthUser, AuthError> {
        let Some(value) = self.headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingAuthorization);
        };

        let value = value
            .to_str()
            .map_err(|_| AuthError::MalformedAuthorization)?;
        let token = value.strip_prefix(BEARER_PREFIX).unwrap_or(value);

        self.token_service.verify(token)
    }
}

/// Middleware guarding every protected route.
///
/// On success the caller's `AuthUser` is inserted into the request extensions for the
/// remainder of the request; otherwise the request is answered with 401 before reaching
/// the handler.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.token_service, request.headers()).require()?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
