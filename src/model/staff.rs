use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Entry of the housekeeping roster returned by `GET /staffs`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StaffSummaryDto {
    pub staff_id: i32,
    pub first_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StaffDto {
    pub staff_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}
