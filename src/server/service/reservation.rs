//! Reservation intake.
//!
//! Booking resolves the guest first: an existing guest is reused, an unknown guest ID
//! causes a new guest to be created for the caller. Guest resolution and the reservation
//! insert share one transaction, so a failed insert never leaves a stray guest behind.

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::server::{
    data::{guest::GuestRepository, reservation::ReservationRepository},
    error::AppError,
    model::{
        guest::{CreateGuestParams, Guest},
        reservation::{CreateReservationParams, Reservation},
    },
    util::phone::generate_placeholder_phone,
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a room on behalf of the authenticated caller.
    ///
    /// # Arguments
    /// - `user_id` - Authenticated caller; becomes the owner of the reservation and of any
    ///   guest created here
    /// - `params` - Booking details, stored verbatim
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Committed reservation with its assigned ID
    /// - `Err(AppError::DbErr(_))` - Any database failure; nothing is persisted
    pub async fn create(
        &self,
        user_id: i32,
        params: CreateReservationParams,
    ) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;

        match Self::resolve_and_insert(&txn, user_id, params).await {
            Ok(reservation) => {
                txn.commit().await?;
                Ok(reservation)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Failed to roll back reservation intake: {}", rollback_err);
                }
                Err(err.into())
            }
        }
    }

    async fn resolve_and_insert(
        txn: &DatabaseTransaction,
        user_id: i32,
        params: CreateReservationParams,
    ) -> Result<Reservation, DbErr> {
        let guest = Self::resolve_guest(txn, user_id, &params).await?;

        ReservationRepository::new(txn)
            .create(&guest, user_id, params)
            .await
    }

    /// Finds the requested guest or creates one from the booking's name and email.
    ///
    /// Only a missing row leads to creation; any lookup error aborts.
    async fn resolve_guest(
        txn: &DatabaseTransaction,
        user_id: i32,
        params: &CreateReservationParams,
    ) -> Result<Guest, DbErr> {
        let guest_repo = GuestRepository::new(txn);

        if let Some(guest) = guest_repo.find_by_id(params.guest_id).await? {
            return Ok(guest);
        }

        let guest = guest_repo
            .create(CreateGuestParams {
                first_name: params.first_name.clone(),
                last_name: params.last_name.clone(),
                email: params.email.clone(),
                phone: generate_placeholder_phone(),
                user_id,
            })
            .await?;

        tracing::info!(
            "Guest {} not found, created guest {} for user {}",
            params.guest_id,
            guest.guest_id,
            user_id
        );

        Ok(guest)
    }
}
