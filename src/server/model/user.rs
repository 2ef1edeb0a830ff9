//! Account domain models and parameters.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::model::auth::CredentialsDto;

/// A registered account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: i32,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model, dropping the password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            user_id: entity.user_id,
            email: entity.email,
            created_at: entity.created_at,
        }
    }
}

/// Email and raw password submitted for registration or login.
///
/// The password is consumed by hashing or verification and never stored or logged;
/// `Debug` redacts it.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn from_dto(dto: CredentialsDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Stored login material for an account.
#[derive(Debug, Clone)]
pub struct StoredCredentials {
    pub user_id: i32,
    pub email: String,
    pub password_hash: String,
}

impl StoredCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            user_id: entity.user_id,
            email: entity.email,
            password_hash: entity.password_hash,
        }
    }
}
