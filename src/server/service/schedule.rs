use sea_orm::DatabaseConnection;

use crate::server::{
    data::schedule::ScheduleRepository,
    error::AppError,
    model::schedule::{CreateScheduleParams, RemoveShiftParams, RescheduleShiftParams, Schedule},
};

pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateScheduleParams) -> Result<Schedule, AppError> {
        let repo = ScheduleRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Schedule>, AppError> {
        let repo = ScheduleRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Removes a shift, failing with 404 when nothing matched.
    pub async fn remove_shift(&self, params: RemoveShiftParams) -> Result<(), AppError> {
        let repo = ScheduleRepository::new(self.db);

        if repo.delete_shift(params).await? == 0 {
            return Err(schedule_not_found());
        }

        Ok(())
    }

    /// Moves a shift to a new time slot, failing with 404 when nothing matched.
    pub async fn reschedule_shift(&self, params: RescheduleShiftParams) -> Result<(), AppError> {
        let repo = ScheduleRepository::new(self.db);

        if repo.update_shift_time(params).await? == 0 {
            return Err(schedule_not_found());
        }

        Ok(())
    }
}

fn schedule_not_found() -> AppError {
    AppError::NotFound("Schedule not found".to_string())
}
