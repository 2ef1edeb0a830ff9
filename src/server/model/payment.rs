//! Payment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::payment::{PaymentDto, PaymentPayloadDto};

/// Payment recorded against a reservation.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub payment_id: i32,
    pub reservation_id: i32,
    pub payment_method: String,
    pub payment_status: String,
    pub amount: f64,
    /// Set by the server when the payment is recorded.
    pub transaction_date: DateTime<Utc>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            payment_id: entity.payment_id,
            reservation_id: entity.reservation_id,
            payment_method: entity.payment_method,
            payment_status: entity.payment_status,
            amount: entity.amount,
            transaction_date: entity.transaction_date,
        }
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            payment_id: self.payment_id,
            reservation_id: self.reservation_id,
            payment_method: self.payment_method,
            payment_status: self.payment_status,
            amount: self.amount,
            transaction_date: self.transaction_date,
        }
    }
}

/// Parameters for recording or replacing a payment.
#[derive(Debug, Clone)]
pub struct PaymentParams {
    pub reservation_id: i32,
    pub payment_method: String,
    pub payment_status: String,
    pub amount: f64,
}

impl PaymentParams {
    pub fn from_dto(dto: PaymentPayloadDto) -> Self {
        Self {
            reservation_id: dto.reservation_id,
            payment_method: dto.payment_method,
            payment_status: dto.payment_status,
            amount: dto.amount,
        }
    }
}
