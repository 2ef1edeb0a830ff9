use crate::model::room::RoomDto;

/// Status of a room that can be booked.
pub const ROOM_STATUS_AVAILABLE: &str = "Available";

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub room_id: i32,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: f64,
    pub status: String,
}

impl Room {
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            room_id: entity.room_id,
            room_number: entity.room_number,
            room_type: entity.room_type,
            price_per_night: entity.price_per_night,
            status: entity.status,
        }
    }

    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            room_id: self.room_id,
            room_number: self.room_number,
            room_type: self.room_type,
            price_per_night: self.price_per_night,
            status: self.status,
        }
    }
}
