//! Account registration and login.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{Credentials, User},
    service::token::TokenService,
    util::email::is_valid_email,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    token_service: &'a TokenService,
    password_cost: u32,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `token_service` - Shared token signer
    /// - `password_cost` - bcrypt work factor for new password hashes
    pub fn new(
        db: &'a DatabaseConnection,
        token_service: &'a TokenService,
        password_cost: u32,
    ) -> Self {
        Self {
            db,
            token_service,
            password_cost,
        }
    }

    /// Registers a new account.
    ///
    /// The password is hashed with bcrypt on the blocking thread pool and dropped once
    /// hashed; only the hash is stored.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::AuthErr(AuthError::InvalidEmail))` - Email is not `local@domain.tld`
    /// - `Err(AppError::AuthErr(AuthError::DuplicateAccount))` - Email is already registered
    /// - `Err(AppError::DbErr(_))` - Any other database failure
    pub async fn register(&self, credentials: Credentials) -> Result<User, AppError> {
        let Credentials { email, password } = credentials;

        if !is_valid_email(&email) {
            return Err(AuthError::InvalidEmail.into());
        }

        let cost = self.password_cost;
        let password_hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
            .map_err(AuthError::from)?;

        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .create(email, password_hash)
            .await
            .map_err(map_duplicate_account)?;

        tracing::info!("Registered account {}", user.user_id);

        Ok(user)
    }

    /// Verifies credentials and issues an access token.
    ///
    /// An unknown email and a wrong password fail identically so callers cannot probe
    /// which accounts exist.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed access token
    /// - `Err(AppError::AuthErr(AuthError::InvalidEmail))` - Email is not `local@domain.tld`
    /// - `Err(AppError::AuthErr(AuthError::InvalidCredentials))` - Unknown email or wrong password
    pub async fn login(&self, credentials: Credentials) -> Result<String, AppError> {
        let Credentials { email, password } = credentials;

        if !is_valid_email(&email) {
            return Err(AuthError::InvalidEmail.into());
        }

        let user_repo = UserRepository::new(self.db);
        let Some(stored) = user_repo.find_credentials_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let password_hash = stored.password_hash;
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
            .await
            .map_err(|e| {
                AppError::InternalError(format!("Password verification task failed: {}", e))
            })?
            .map_err(AuthError::from)?;

        if !matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.issue(stored.user_id, &stored.email)?;

        Ok(token)
    }
}

/// Reports a unique violation on insert as a duplicate account without naming the column.
fn map_duplicate_account(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AuthError::DuplicateAccount.into(),
        _ => err.into(),
    }
}
