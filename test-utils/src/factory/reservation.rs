//! Reservation factory for creating test reservation entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a confirmed two-night reservation.
///
/// # Arguments
/// - `db` - Database connection
/// - `guest_id` - Guest the reservation is for
/// - `room_id` - Room being reserved
/// - `user_id` - Account owning the reservation
///
/// # Returns
/// - `Ok(entity::reservation::Model)` - Created reservation entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_reservation(
    db: &DatabaseConnection,
    guest_id: i32,
    room_id: i32,
    user_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    entity::reservation::ActiveModel {
        guest_id: ActiveValue::Set(guest_id),
        room_id: ActiveValue::Set(room_id),
        check_in_date: ActiveValue::Set("2025-06-01".to_string()),
        check_out_date: ActiveValue::Set("2025-06-03".to_string()),
        status: ActiveValue::Set("Confirmed".to_string()),
        total_price: ActiveValue::Set(200.0),
        created_at: ActiveValue::Set(Utc::now()),
        user_id: ActiveValue::Set(user_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
