//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token service holding the process-wide signing keys
//! - bcrypt cost used for new password hashes

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::service::token::TokenService;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<TokenService>` is a reference-counted pointer to read-only keys
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Mints and verifies access tokens.
    ///
    /// Built once from the configured signing secret and never rotated while the
    /// process runs.
    pub token_service: Arc<TokenService>,

    /// bcrypt work factor for hashing passwords at registration.
    pub password_cost: u32,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `token_service` - Token service built from the signing secret
    /// - `password_cost` - bcrypt work factor
    pub fn new(db: DatabaseConnection, token_service: TokenService, password_cost: u32) -> Self {
        Self {
            db,
            token_service: Arc::new(token_service),
            password_cost,
        }
    }
}
