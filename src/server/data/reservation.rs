//! Reservation data repository for database operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::model::{
    guest::Guest,
    reservation::{CreateReservationParams, Reservation},
};

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a reservation for an already resolved guest.
    ///
    /// Dates, status and total price are stored exactly as supplied. The `guest_id` of
    /// `params` is ignored in favour of the resolved `guest`.
    ///
    /// # Arguments
    /// - `guest` - Guest the reservation is for
    /// - `user_id` - Owning account
    /// - `params` - Booking details
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Inserted reservation joined with the guest's name and email
    /// - `Err(DbErr)` - Database error, including foreign key violations for unknown rooms
    pub async fn create(
        &self,
        guest: &Guest,
        user_id: i32,
        params: CreateReservationParams,
    ) -> Result<Reservation, DbErr> {
        let entity = entity::reservation::ActiveModel {
            guest_id: ActiveValue::Set(guest.guest_id),
            room_id: ActiveValue::Set(params.room_id),
            check_in_date: ActiveValue::Set(params.check_in_date),
            check_out_date: ActiveValue::Set(params.check_out_date),
            status: ActiveValue::Set(params.status),
            total_price: ActiveValue::Set(params.total_price),
            created_at: ActiveValue::Set(Utc::now()),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reservation::from_entity(entity, guest))
    }
}
