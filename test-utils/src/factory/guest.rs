//! Guest factory for creating test guest entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guests owned by a user.
pub struct GuestFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
}

impl<'a> GuestFactory<'a> {
    /// Creates a new GuestFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Guest"`
    /// - last_name: `"{id}"`
    /// - email: `"guest{id}@example.com"`
    /// - phone: `"555-555-0000"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the account owning the guest
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            first_name: "Guest".to_string(),
            last_name: id.to_string(),
            email: format!("guest{}@example.com", id),
            phone: "555-555-0000".to_string(),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Builds and inserts the guest entity into the database.
    pub async fn build(self) -> Result<entity::guest::Model, DbErr> {
        entity::guest::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            user_id: ActiveValue::Set(self.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guest with default values owned by `user_id`.
pub async fn create_guest(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::guest::Model, DbErr> {
    GuestFactory::new(db, user_id).build().await
}
