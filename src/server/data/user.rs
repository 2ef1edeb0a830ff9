//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records. Password hashes
//! only leave this module inside `StoredCredentials`, which the login flow consumes.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::user::{StoredCredentials, User};

/// Repository providing database operations for account management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account with an already hashed password.
    ///
    /// # Arguments
    /// - `email` - Login email, unique across accounts
    /// - `password_hash` - bcrypt hash of the account password
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(DbErr)` - Database error, including a unique constraint violation when the
    ///   email is already registered
    pub async fn create(&self, email: String, password_hash: String) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds the stored login material for an email.
    ///
    /// # Returns
    /// - `Ok(Some(StoredCredentials))` - Account exists
    /// - `Ok(None)` - No account is registered under the email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<StoredCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(StoredCredentials::from_entity))
    }
}
