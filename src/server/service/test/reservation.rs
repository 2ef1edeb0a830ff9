use super::*;
use crate::server::{
    model::reservation::CreateReservationParams, service::reservation::ReservationService,
};

fn booking(guest_id: i32, room_id: i32) -> CreateReservationParams {
    CreateReservationParams {
        guest_id,
        room_id,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        check_in_date: "2025-06-01".to_string(),
        check_out_date: "2025-06-04".to_string(),
        status: "Confirmed".to_string(),
        total_price: 300.0,
    }
}

/// Tests booking for a guest that already exists.
///
/// Expected: no new guest rows, one reservation referencing the existing guest
#[tokio::test]
async fn reuses_existing_guest() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let caller = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;
    let guest = factory::create_guest(db, owner.user_id).await?;

    let service = ReservationService::new(db);
    let reservation = service
        .create(caller.user_id, booking(guest.guest_id, room.room_id))
        .await?;

    assert_eq!(reservation.guest_id, guest.guest_id);
    assert_eq!(reservation.user_id, caller.user_id);
    assert_eq!(reservation.first_name, guest.first_name);
    assert_eq!(reservation.email, guest.email);
    assert_eq!(entity::prelude::Guest::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Reservation::find().count(db).await?, 1);

    Ok(())
}

/// Tests booking with a guest ID that does not exist.
///
/// Verifies that exactly one guest is created from the booking's name and email, owned by
/// the caller and given a placeholder phone number, and that the reservation points at it.
///
/// Expected: one new guest row and one reservation row owned by the caller
#[tokio::test]
async fn creates_missing_guest() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;

    let service = ReservationService::new(db);
    let reservation = service
        .create(caller.user_id, booking(999, room.room_id))
        .await?;

    let guests = entity::prelude::Guest::find().all(db).await?;
    assert_eq!(guests.len(), 1);
    let guest = &guests[0];

    assert_ne!(guest.guest_id, 999);
    assert_eq!(guest.first_name, "Ada");
    assert_eq!(guest.last_name, "Lovelace");
    assert_eq!(guest.email, "ada@example.com");
    assert_eq!(guest.user_id, caller.user_id);
    assert_eq!(guest.phone.len(), 12);

    assert_eq!(reservation.guest_id, guest.guest_id);
    assert_eq!(reservation.user_id, caller.user_id);
    assert_eq!(reservation.total_price, 300.0);
    assert_eq!(entity::prelude::Reservation::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a failed reservation insert does not leave a created guest behind.
///
/// The room does not exist, so the insert violates its foreign key after the guest has
/// been created inside the same transaction.
///
/// Expected: Err(AppError::DbErr) with no guest or reservation rows
#[tokio::test]
async fn rolls_back_created_guest_on_failure() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = factory::create_user(db).await?;

    let service = ReservationService::new(db);
    let result = service.create(caller.user_id, booking(999, 404)).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(entity::prelude::Guest::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Reservation::find().count(db).await?, 0);

    Ok(())
}
