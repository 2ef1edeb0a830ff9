//! Staff shift domain models and parameters.
//!
//! A shift is identified for removal and rescheduling by the staff member and day
//! rather than by its own ID.

use crate::model::schedule::{CreateScheduleDto, ScheduleDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub schedule_id: i32,
    pub staff_id: i32,
    pub shift_date: String,
    pub shift_time: String,
}

impl Schedule {
    pub fn from_entity(entity: entity::staff_schedule::Model) -> Self {
        Self {
            schedule_id: entity.schedule_id,
            staff_id: entity.staff_id,
            shift_date: entity.shift_date,
            shift_time: entity.shift_time,
        }
    }

    pub fn into_dto(self) -> ScheduleDto {
        ScheduleDto {
            schedule_id: self.schedule_id,
            staff_id: self.staff_id,
            shift_date: self.shift_date,
            shift_time: self.shift_time,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateScheduleParams {
    pub staff_id: i32,
    pub shift_date: String,
    pub shift_time: String,
}

impl CreateScheduleParams {
    pub fn from_dto(dto: CreateScheduleDto) -> Self {
        Self {
            staff_id: dto.staff_id,
            shift_date: dto.shift_date,
            shift_time: dto.shift_time,
        }
    }
}

/// Selects the shifts of one staff member on one day with a given time slot.
#[derive(Debug, Clone)]
pub struct RemoveShiftParams {
    pub staff_id: i32,
    pub shift_date: String,
    pub shift_time: String,
}

/// Moves a staff member's shifts on one day to a new time slot.
#[derive(Debug, Clone)]
pub struct RescheduleShiftParams {
    pub staff_id: i32,
    pub shift_date: String,
    pub new_shift_time: String,
}
