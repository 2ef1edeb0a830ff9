//! Shared fixtures for the hotel backend's tests.
//!
//! Each test gets a fresh in-memory SQLite database with only the tables it asks for.
//! `TestBuilder` picks the tables, `TestContext` owns the resulting connection and the
//! `factory` module inserts rows with usable defaults.
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn books_a_room() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_reservation_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (_, room, guest, reservation) =
//!         factory::helpers::create_reservation_with_dependencies(db).await?;
//!     assert_eq!(reservation.room_id, room.room_id);
//!     assert_eq!(reservation.guest_id, guest.guest_id);
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
