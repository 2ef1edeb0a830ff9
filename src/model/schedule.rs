use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateScheduleDto {
    pub staff_id: i32,
    /// Day of the week, e.g. "Monday".
    pub shift_date: String,
    /// "Morning", "Afternoon" or "Night".
    pub shift_time: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ScheduleDto {
    pub schedule_id: i32,
    pub staff_id: i32,
    pub shift_date: String,
    pub shift_time: String,
}
