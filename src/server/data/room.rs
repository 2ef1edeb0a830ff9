use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::room::{Room, ROOM_STATUS_AVAILABLE};

pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets bookable rooms of a type, ordered by ID.
    pub async fn get_available_by_type(&self, room_type: &str) -> Result<Vec<Room>, DbErr> {
        let entities = entity::prelude::Room::find()
            .filter(entity::room::Column::RoomType.eq(room_type))
            .filter(entity::room::Column::Status.eq(ROOM_STATUS_AVAILABLE))
            .order_by_asc(entity::room::Column::RoomId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }
}
