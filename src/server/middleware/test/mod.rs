use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    error::auth::AuthError, middleware::auth::AuthGuard, service::token::TokenService,
};

mod session;
