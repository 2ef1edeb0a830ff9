//! Staff shift data repository.
//!
//! Removal and rescheduling match shifts by staff member and day, so both report how many
//! rows they touched instead of returning a model.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::schedule::{
    CreateScheduleParams, RemoveShiftParams, RescheduleShiftParams, Schedule,
};

pub struct ScheduleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a shift for a staff member.
    ///
    /// # Returns
    /// - `Ok(Schedule)` - Created shift
    /// - `Err(DbErr)` - Database error, including a foreign key violation for unknown staff
    pub async fn create(&self, params: CreateScheduleParams) -> Result<Schedule, DbErr> {
        let entity = entity::staff_schedule::ActiveModel {
            staff_id: ActiveValue::Set(params.staff_id),
            shift_date: ActiveValue::Set(params.shift_date),
            shift_time: ActiveValue::Set(params.shift_time),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Schedule::from_entity(entity))
    }

    /// Gets every shift ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Schedule>, DbErr> {
        let entities = entity::prelude::StaffSchedule::find()
            .order_by_asc(entity::staff_schedule::Column::ScheduleId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Schedule::from_entity).collect())
    }

    /// Deletes the matching shifts and returns the number removed.
    pub async fn delete_shift(&self, params: RemoveShiftParams) -> Result<u64, DbErr> {
        let result = entity::prelude::StaffSchedule::delete_many()
            .filter(entity::staff_schedule::Column::StaffId.eq(params.staff_id))
            .filter(entity::staff_schedule::Column::ShiftDate.eq(params.shift_date))
            .filter(entity::staff_schedule::Column::ShiftTime.eq(params.shift_time))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Moves a staff member's shifts on a day to a new time slot and returns the number
    /// updated.
    pub async fn update_shift_time(&self, params: RescheduleShiftParams) -> Result<u64, DbErr> {
        let result = entity::prelude::StaffSchedule::update_many()
            .col_expr(
                entity::staff_schedule::Column::ShiftTime,
                Expr::value(params.new_shift_time),
            )
            .filter(entity::staff_schedule::Column::StaffId.eq(params.staff_id))
            .filter(entity::staff_schedule::Column::ShiftDate.eq(params.shift_date))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
