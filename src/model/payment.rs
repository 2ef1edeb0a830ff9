use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /payments` and `PUT /payments/{id}`.
#[derive(Deserialize, ToSchema)]
pub struct PaymentPayloadDto {
    pub reservation_id: i32,
    pub payment_method: String,
    pub payment_status: String,
    pub amount: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaymentDto {
    pub payment_id: i32,
    pub reservation_id: i32,
    pub payment_method: String,
    pub payment_status: String,
    pub amount: f64,
    pub transaction_date: DateTime<Utc>,
}
