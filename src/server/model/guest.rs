//! Guest domain models and parameters.
//!
//! A guest is the person a reservation is for, distinct from the account that books it.
//! Every guest is owned by exactly one account.

use crate::model::guest::{GuestDto, GuestPayloadDto};

/// Booking subject owned by an account.
#[derive(Debug, Clone, PartialEq)]
pub struct Guest {
    /// Unique identifier for the guest.
    pub guest_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// ID of the account that owns the guest.
    pub user_id: i32,
}

impl Guest {
    pub fn from_entity(entity: entity::guest::Model) -> Self {
        Self {
            guest_id: entity.guest_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            user_id: entity.user_id,
        }
    }

    pub fn into_dto(self) -> GuestDto {
        GuestDto {
            guest_id: self.guest_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            user_id: self.user_id,
        }
    }
}

/// Parameters for creating a guest.
#[derive(Debug, Clone)]
pub struct CreateGuestParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Owning account, always the authenticated caller.
    pub user_id: i32,
}

impl CreateGuestParams {
    pub fn from_dto(user_id: i32, dto: GuestPayloadDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            user_id,
        }
    }
}

/// Parameters for replacing a guest's contact details.
#[derive(Debug, Clone)]
pub struct UpdateGuestParams {
    pub guest_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl UpdateGuestParams {
    pub fn from_dto(guest_id: i32, dto: GuestPayloadDto) -> Self {
        Self {
            guest_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
        }
    }
}
