use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::staff::Staff;

pub struct StaffRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all staff members holding a role, ordered by ID.
    pub async fn get_by_role(&self, role: &str) -> Result<Vec<Staff>, DbErr> {
        let entities = entity::prelude::Staff::find()
            .filter(entity::staff::Column::Role.eq(role))
            .order_by_asc(entity::staff::Column::StaffId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Staff::from_entity).collect())
    }

    pub async fn find_by_id(&self, staff_id: i32) -> Result<Option<Staff>, DbErr> {
        let entity = entity::prelude::Staff::find_by_id(staff_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Staff::from_entity))
    }
}
