pub use super::guest::Entity as Guest;
pub use super::payment::Entity as Payment;
pub use super::reservation::Entity as Reservation;
pub use super::room::Entity as Room;
pub use super::staff::Entity as Staff;
pub use super::staff_schedule::Entity as StaffSchedule;
pub use super::user::Entity as User;
