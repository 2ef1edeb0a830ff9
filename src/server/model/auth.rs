//! Identity of the caller of a protected request.

use crate::model::auth::ProfileDto;

/// Identity extracted from a verified access token.
///
/// Inserted into the request extensions by the authentication middleware and read by
/// handlers for the remainder of that request only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// ID of the authenticated account.
    pub user_id: i32,
    /// Email the token was issued for.
    pub email: String,
}

impl AuthUser {
    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            user_id: self.user_id,
            email: self.email,
        }
    }
}
