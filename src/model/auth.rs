use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Credentials submitted to `/register` and `/login`.
#[derive(Deserialize, ToSchema)]
pub struct CredentialsDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisteredDto {
    pub message: String,
    pub user_id: i32,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub message: String,
    pub token: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub user_id: i32,
    pub email: String,
}
