use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /reservations`.
///
/// There is deliberately no `user_id` field: a `user_id` sent by the client is ignored
/// and the owner is taken from the verified token. `first_name`, `last_name` and `email`
/// are only used when `guest_id` does not resolve to an existing guest.
#[derive(Deserialize, ToSchema)]
pub struct CreateReservationDto {
    pub guest_id: i32,
    pub room_id: i32,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub check_in_date: String,
    pub check_out_date: String,
    #[serde(default)]
    pub status: String,
    pub total_price: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReservationDto {
    pub reservation_id: i32,
    pub guest_id: i32,
    pub room_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub status: String,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
    pub user_id: i32,
}
