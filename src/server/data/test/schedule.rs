use super::*;
use crate::server::{
    data::schedule::ScheduleRepository,
    model::schedule::{CreateScheduleParams, RemoveShiftParams, RescheduleShiftParams},
};

fn shift(staff_id: i32, shift_date: &str, shift_time: &str) -> CreateScheduleParams {
    CreateScheduleParams {
        staff_id,
        shift_date: shift_date.to_string(),
        shift_time: shift_time.to_string(),
    }
}

/// Tests removing a shift matched by staff, day and time.
///
/// Expected: only the matching row is removed
#[tokio::test]
async fn deletes_matching_shift() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_staff_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::create_staff(db).await?;

    let repo = ScheduleRepository::new(db);
    repo.create(shift(staff.staff_id, "2025-06-01", "Morning"))
        .await?;
    let kept = repo
        .create(shift(staff.staff_id, "2025-06-02", "Morning"))
        .await?;

    let removed = repo
        .delete_shift(RemoveShiftParams {
            staff_id: staff.staff_id,
            shift_date: "2025-06-01".to_string(),
            shift_time: "Morning".to_string(),
        })
        .await?;

    assert_eq!(removed, 1);
    let remaining = repo.get_all().await?;
    assert_eq!(remaining, vec![kept]);

    Ok(())
}

/// Tests removing a shift that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn delete_reports_zero_when_nothing_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_staff_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::create_staff(db).await?;

    let repo = ScheduleRepository::new(db);
    repo.create(shift(staff.staff_id, "2025-06-01", "Morning"))
        .await?;

    let removed = repo
        .delete_shift(RemoveShiftParams {
            staff_id: staff.staff_id,
            shift_date: "2025-06-01".to_string(),
            shift_time: "Night".to_string(),
        })
        .await?;

    assert_eq!(removed, 0);
    assert_eq!(entity::prelude::StaffSchedule::find().count(db).await?, 1);

    Ok(())
}

/// Tests moving a day's shift to a new time slot.
///
/// Expected: the shift time changes only for the selected staff member and day
#[tokio::test]
async fn updates_shift_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_staff_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::create_staff(db).await?;
    let other = factory::create_staff(db).await?;

    let repo = ScheduleRepository::new(db);
    let target = repo
        .create(shift(staff.staff_id, "2025-06-01", "Morning"))
        .await?;
    let untouched = repo
        .create(shift(other.staff_id, "2025-06-01", "Morning"))
        .await?;

    let updated = repo
        .update_shift_time(RescheduleShiftParams {
            staff_id: staff.staff_id,
            shift_date: "2025-06-01".to_string(),
            new_shift_time: "Evening".to_string(),
        })
        .await?;

    assert_eq!(updated, 1);
    let all = repo.get_all().await?;
    let target_after = all.iter().find(|s| s.schedule_id == target.schedule_id).unwrap();
    let untouched_after = all
        .iter()
        .find(|s| s.schedule_id == untouched.schedule_id)
        .unwrap();
    assert_eq!(target_after.shift_time, "Evening");
    assert_eq!(untouched_after.shift_time, "Morning");

    Ok(())
}

/// Tests creating a shift for an unknown staff member.
///
/// Expected: Err(DbErr) from the foreign key constraint
#[tokio::test]
async fn rejects_shift_for_unknown_staff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_staff_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScheduleRepository::new(db);
    let result = repo.create(shift(12345, "2025-06-01", "Morning")).await;

    assert!(result.is_err());

    Ok(())
}
