use super::*;

fn booking(guest_id: i64, room_id: i32) -> Value {
    json!({
        "guest_id": guest_id,
        "room_id": room_id,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": "ada@example.com",
        "check_in_date": "2025-06-01",
        "check_out_date": "2025-06-03",
        "status": "Confirmed",
        "total_price": 250.0,
        "user_id": 4242
    })
}

/// Tests booking with a guest ID that does not exist.
///
/// Verifies that a guest is minted for the caller, that its ID replaces the requested one,
/// and that a `user_id` in the body is ignored.
///
/// Expected: 201 with a new guest ID and the caller's user ID
#[tokio::test]
async fn creates_guest_for_unknown_guest_id() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = app(db);

    let room = factory::create_room(db).await.unwrap();
    let (user_id, token) = register_and_login(&app, "a@b.com").await;

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/reservations",
            Some(&token),
            Some(booking(999, room.room_id)),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(body["guest_id"].as_i64(), Some(999));
    assert_eq!(body["user_id"].as_i64(), Some(user_id));
    assert_eq!(body["room_id"].as_i64(), Some(room.room_id as i64));
    assert_eq!(body["first_name"], "Ada");
    assert_eq!(body["total_price"].as_f64(), Some(250.0));
    assert!(body["reservation_id"].as_i64().is_some());
    assert!(body["created_at"].is_string());

    let guest = entity::prelude::Guest::find_by_id(body["guest_id"].as_i64().unwrap() as i32)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(guest.user_id as i64, user_id);
    assert_eq!(entity::prelude::Guest::find().count(db).await.unwrap(), 1);
}

/// Tests booking for an existing guest.
///
/// Expected: 201 referencing the guest and no new guest row
#[tokio::test]
async fn reuses_existing_guest() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = app(db);

    let room = factory::create_room(db).await.unwrap();
    let (user_id, token) = register_and_login(&app, "a@b.com").await;
    let guest = factory::create_guest(db, user_id as i32).await.unwrap();

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/reservations",
            Some(&token),
            Some(booking(guest.guest_id as i64, room.room_id)),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["guest_id"].as_i64(), Some(guest.guest_id as i64));
    assert_eq!(body["first_name"], guest.first_name.as_str());
    assert_eq!(entity::prelude::Guest::find().count(db).await.unwrap(), 1);
    assert_eq!(
        entity::prelude::Reservation::find().count(db).await.unwrap(),
        1
    );
}

/// Tests booking without a token.
///
/// Expected: 401 and nothing persisted
#[tokio::test]
async fn requires_authentication() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = app(db);

    let room = factory::create_room(db).await.unwrap();

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/reservations",
            None,
            Some(booking(999, room.room_id)),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(entity::prelude::Guest::find().count(db).await.unwrap(), 0);
}

/// Tests a booking whose insert fails after a guest would have been created.
///
/// Expected: 500 with a generic message and no guest row left behind
#[tokio::test]
async fn failed_booking_persists_nothing() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = app(db);

    let (_, token) = register_and_login(&app, "a@b.com").await;

    let (status, body) = send(
        &app,
        request(Method::POST, "/reservations", Some(&token), Some(booking(999, 404))),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(entity::prelude::Guest::find().count(db).await.unwrap(), 0);
}
