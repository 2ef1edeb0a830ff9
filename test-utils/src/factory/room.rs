//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    room_number: String,
    room_type: String,
    price_per_night: f64,
    status: String,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - room_number: `"{id}"`
    /// - room_type: `"Single"`
    /// - price_per_night: `100.0`
    /// - status: `"Available"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            room_number: next_id().to_string(),
            room_type: "Single".to_string(),
            price_per_night: 100.0,
            status: "Available".to_string(),
        }
    }

    pub fn room_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_type = room_type.into();
        self
    }

    pub fn price_per_night(mut self, price_per_night: f64) -> Self {
        self.price_per_night = price_per_night;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            room_number: ActiveValue::Set(self.room_number),
            room_type: ActiveValue::Set(self.room_type),
            price_per_night: ActiveValue::Set(self.price_per_night),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available single room.
pub async fn create_room(db: &DatabaseConnection) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db).build().await
}
