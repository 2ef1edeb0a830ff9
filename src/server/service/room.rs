use sea_orm::DatabaseConnection;

use crate::server::{data::room::RoomRepository, error::AppError, model::room::Room};

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists rooms of a type that can currently be booked.
    pub async fn get_available(&self, room_type: &str) -> Result<Vec<Room>, AppError> {
        let repo = RoomRepository::new(self.db);

        Ok(repo.get_available_by_type(room_type).await?)
    }
}
