pub mod prelude;

pub mod guest;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod staff;
pub mod staff_schedule;
pub mod user;
