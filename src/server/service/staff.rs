use sea_orm::DatabaseConnection;

use crate::server::{
    data::staff::StaffRepository,
    error::AppError,
    model::staff::{Staff, ROLE_HOUSEKEEPING},
};

pub struct StaffService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the housekeeping roster.
    pub async fn get_housekeeping(&self) -> Result<Vec<Staff>, AppError> {
        let repo = StaffRepository::new(self.db);

        Ok(repo.get_by_role(ROLE_HOUSEKEEPING).await?)
    }

    pub async fn get_by_id(&self, staff_id: i32) -> Result<Staff, AppError> {
        let repo = StaffRepository::new(self.db);

        repo.find_by_id(staff_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Staff not found".to_string()))
    }
}
