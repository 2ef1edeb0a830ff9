use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RoomDto {
    pub room_id: i32,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: f64,
    pub status: String,
}
