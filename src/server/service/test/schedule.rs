use super::*;
use crate::server::{
    model::schedule::{CreateScheduleParams, RemoveShiftParams, RescheduleShiftParams},
    service::schedule::ScheduleService,
};

/// Tests removing and rescheduling shifts that do not exist.
///
/// Expected: Err(AppError::NotFound) for both
#[tokio::test]
async fn reports_missing_shift() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_staff_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::create_staff(db).await?;

    let service = ScheduleService::new(db);
    service
        .create(CreateScheduleParams {
            staff_id: staff.staff_id,
            shift_date: "2025-06-01".to_string(),
            shift_time: "Morning".to_string(),
        })
        .await?;

    let removed = service
        .remove_shift(RemoveShiftParams {
            staff_id: staff.staff_id,
            shift_date: "2025-06-02".to_string(),
            shift_time: "Morning".to_string(),
        })
        .await;
    let rescheduled = service
        .reschedule_shift(RescheduleShiftParams {
            staff_id: staff.staff_id + 1,
            shift_date: "2025-06-01".to_string(),
            new_shift_time: "Night".to_string(),
        })
        .await;

    assert!(matches!(removed, Err(AppError::NotFound(_))));
    assert!(matches!(rescheduled, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::StaffSchedule::find().count(db).await?, 1);

    Ok(())
}
