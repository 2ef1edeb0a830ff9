//! HTTP request handlers.
//!
//! Controllers convert request DTOs into parameter models, call the service layer, and
//! convert the returned domain models back into response DTOs. Every handler except
//! registration and login runs behind the authentication middleware and reads the
//! caller's identity from `AuthUser`.

pub mod auth;
pub mod guest;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod schedule;
pub mod staff;
