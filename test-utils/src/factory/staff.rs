//! Staff factory for creating test staff entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test staff members.
pub struct StaffFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    role: String,
}

impl<'a> StaffFactory<'a> {
    /// Creates a new StaffFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Staff"`
    /// - last_name: `"{id}"`
    /// - email: `"staff{id}@example.com"`
    /// - role: `"Housekeeping"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Staff".to_string(),
            last_name: id.to_string(),
            email: format!("staff{}@example.com", id),
            role: "Housekeeping".to_string(),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds and inserts the staff entity into the database.
    pub async fn build(self) -> Result<entity::staff::Model, DbErr> {
        entity::staff::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            role: ActiveValue::Set(self.role),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a housekeeping staff member.
pub async fn create_staff(db: &DatabaseConnection) -> Result<entity::staff::Model, DbErr> {
    StaffFactory::new(db).build().await
}
