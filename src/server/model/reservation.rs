//! Reservation domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::reservation::{CreateReservationDto, ReservationDto},
    server::model::guest::Guest,
};

/// A room booking together with the guest it was resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub reservation_id: i32,
    pub guest_id: i32,
    pub room_id: i32,
    /// Name and email of the resolved guest.
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Calendar strings stored as supplied; no range validation is applied.
    pub check_in_date: String,
    pub check_out_date: String,
    pub status: String,
    /// Caller-supplied total, stored verbatim.
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
    /// Owning account, always the authenticated caller.
    pub user_id: i32,
}

impl Reservation {
    /// Builds the domain model from the inserted row and the guest it references.
    pub fn from_entity(entity: entity::reservation::Model, guest: &Guest) -> Self {
        Self {
            reservation_id: entity.reservation_id,
            guest_id: entity.guest_id,
            room_id: entity.room_id,
            first_name: guest.first_name.clone(),
            last_name: guest.last_name.clone(),
            email: guest.email.clone(),
            check_in_date: entity.check_in_date,
            check_out_date: entity.check_out_date,
            status: entity.status,
            total_price: entity.total_price,
            created_at: entity.created_at,
            user_id: entity.user_id,
        }
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            reservation_id: self.reservation_id,
            guest_id: self.guest_id,
            room_id: self.room_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            status: self.status,
            total_price: self.total_price,
            created_at: self.created_at,
            user_id: self.user_id,
        }
    }
}

/// Parameters for booking a room.
///
/// `guest_id` may name a guest that does not exist yet; in that case a guest is
/// created from `first_name`, `last_name` and `email`.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub guest_id: i32,
    pub room_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub status: String,
    pub total_price: f64,
}

impl CreateReservationParams {
    pub fn from_dto(dto: CreateReservationDto) -> Self {
        Self {
            guest_id: dto.guest_id,
            room_id: dto.room_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            check_in_date: dto.check_in_date,
            check_out_date: dto.check_out_date,
            status: dto.status,
            total_price: dto.total_price,
        }
    }
}
