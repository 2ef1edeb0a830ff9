use sea_orm::DatabaseConnection;

use crate::server::{
    data::guest::GuestRepository,
    error::AppError,
    model::guest::{CreateGuestParams, Guest, UpdateGuestParams},
};

pub struct GuestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateGuestParams) -> Result<Guest, AppError> {
        let repo = GuestRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Guest>, AppError> {
        let repo = GuestRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a guest by ID, failing with 404 when it does not exist.
    pub async fn get_by_id(&self, guest_id: i32) -> Result<Guest, AppError> {
        let repo = GuestRepository::new(self.db);

        repo.find_by_id(guest_id)
            .await?
            .ok_or_else(guest_not_found)
    }

    pub async fn update(&self, params: UpdateGuestParams) -> Result<Guest, AppError> {
        let repo = GuestRepository::new(self.db);

        repo.update(params).await?.ok_or_else(guest_not_found)
    }

    /// Deletes a guest that no reservation references.
    ///
    /// Reservations are never removed on a guest's behalf, so a booked guest is a 409.
    pub async fn delete(&self, guest_id: i32) -> Result<(), AppError> {
        let repo = GuestRepository::new(self.db);

        if repo.has_reservations(guest_id).await? {
            return Err(AppError::Conflict("Guest has reservations".to_string()));
        }

        if !repo.delete(guest_id).await? {
            return Err(guest_not_found());
        }

        Ok(())
    }
}

fn guest_not_found() -> AppError {
    AppError::NotFound("Guest not found".to_string())
}
