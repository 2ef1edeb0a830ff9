//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a reservation together with the user, room, and guest it references.
///
/// All entities are created with default values. Use the individual factories if you
/// need to customize specific entities.
///
/// # Returns
/// - `Ok((user, room, guest, reservation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::room::Model,
        entity::guest::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let room = crate::factory::room::create_room(db).await?;
    let guest = crate::factory::guest::create_guest(db, user.user_id).await?;
    let reservation =
        crate::factory::reservation::create_reservation(db, guest.guest_id, room.room_id, user.user_id)
            .await?;

    Ok((user, room, guest, reservation))
}
