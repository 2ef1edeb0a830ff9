//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take care of foreign key relationships where
//! a helper exists for them.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let room = factory::room::create_room(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, room, guest, reservation) =
//!         factory::helpers::create_reservation_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("front-desk@example.com")
//!     .build()
//!     .await?;
//!
//! let suite = factory::room::RoomFactory::new(&db)
//!     .room_type("Suite")
//!     .status("Occupied")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user (account) entities
//! - `room` - Create room entities
//! - `guest` - Create guest entities owned by a user
//! - `reservation` - Create reservation entities
//! - `staff` - Create staff entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod guest;
pub mod helpers;
pub mod reservation;
pub mod room;
pub mod staff;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use guest::create_guest;
pub use reservation::create_reservation;
pub use room::create_room;
pub use staff::create_staff;
pub use user::create_user;
