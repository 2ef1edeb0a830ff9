use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /guests` and `PUT /guests/{id}`.
///
/// Ownership is never read from the body; it comes from the caller's token.
#[derive(Deserialize, ToSchema)]
pub struct GuestPayloadDto {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GuestDto {
    pub guest_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub user_id: i32,
}
