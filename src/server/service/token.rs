//! Signed access tokens.
//!
//! Tokens are HS256 JWTs carrying the account ID, email, and an expiration 24 hours after
//! issue. No server-side record is kept; a token is valid exactly when its signature
//! matches the process secret and its expiration has not passed.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, config::ConfigError},
    model::auth::AuthUser,
};

/// Lifetime of an issued token in hours.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Payload of an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user_id: i32,
    pub email: String,
    /// Expiration as seconds since the Unix epoch.
    pub exp: i64,
}

/// Issues and verifies access tokens with a single symmetric secret.
///
/// Built once at startup and shared read-only for the lifetime of the process.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a token service from the signing secret.
    ///
    /// # Returns
    /// - `Ok(TokenService)` - Ready to issue and verify tokens
    /// - `Err(ConfigError::EmptySigningSecret)` - Secret is empty
    pub fn new(secret: &str) -> Result<Self, ConfigError> {
        if secret.is_empty() {
            return Err(ConfigError::EmptySigningSecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiration is compared against the caller's clock in `verify_at`.
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Issues a token for an account, valid for 24 hours from now.
    pub fn issue(&self, user_id: i32, email: &str) -> Result<String, AuthError> {
        self.issue_at(user_id, email, Utc::now())
    }

    /// Issues a token as if the current time were `now`.
    pub fn issue_at(
        &self,
        user_id: i32,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let claims = TokenClaims {
            user_id,
            email: email.to_string(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(AuthError::TokenSigning)
    }

    /// Verifies a token against the current time.
    pub fn verify(&self, token: &str) -> Result<AuthUser, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies a token's signature and checks its expiration against `now`.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Identity carried by the token
    /// - `Err(AuthError::InvalidToken)` - Token is malformed or signed with another secret
    /// - `Err(AuthError::TokenExpired)` - Expiration is at or before `now`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<AuthUser, AuthError> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(AuthError::InvalidToken)?;

        if data.claims.exp <= now.timestamp() {
            return Err(AuthError::TokenExpired);
        }

        Ok(AuthUser {
            user_id: data.claims.user_id,
            email: data.claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify() {
        let service = TokenService::new("test-secret").unwrap();

        let token = service.issue(7, "guest@example.com").unwrap();
        let user = service.verify(&token).unwrap();

        assert_eq!(user.user_id, 7);
        assert_eq!(user.email, "guest@example.com");
    }

    #[test]
    fn test_rejects_empty_secret() {
        assert!(matches!(
            TokenService::new(""),
            Err(ConfigError::EmptySigningSecret)
        ));
    }

    #[test]
    fn test_expires_after_ttl() {
        let service = TokenService::new("test-secret").unwrap();
        let issued = Utc::now();
        let token = service.issue_at(1, "a@b.com", issued).unwrap();

        let ttl = Duration::hours(TOKEN_TTL_HOURS);

        let just_before = issued + ttl - Duration::seconds(1);
        assert!(service.verify_at(&token, just_before).is_ok());

        let after = issued + ttl + Duration::seconds(1);
        assert!(matches!(
            service.verify_at(&token, after),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_rejects_token_from_other_secret() {
        let issuer = TokenService::new("secret-one").unwrap();
        let verifier = TokenService::new("secret-two").unwrap();

        let token = issuer.issue(1, "a@b.com").unwrap();

        assert!(matches!(
            verifier.verify(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_token() {
        let service = TokenService::new("test-secret").unwrap();

        assert!(matches!(
            service.verify("not.a.jwt"),
            Err(AuthError::InvalidToken(_))
        ));
        assert!(matches!(
            service.verify(""),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_rejects_tampered_payload() {
        let service = TokenService::new("test-secret").unwrap();
        let token = service.issue(1, "a@b.com").unwrap();
        let other = service.issue(2, "c@d.com").unwrap();

        // Splice the second token's payload onto the first token's signature.
        let parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

        assert!(matches!(
            service.verify(&forged),
            Err(AuthError::InvalidToken(_))
        ));
    }
}
