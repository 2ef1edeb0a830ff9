//! JSON data transfer objects for the HTTP API.
//!
//! These are the request and response bodies exchanged with clients. Server-side domain
//! models live in `server::model` and are converted to and from these at the controller
//! boundary.

pub mod api;
pub mod auth;
pub mod guest;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod schedule;
pub mod staff;
