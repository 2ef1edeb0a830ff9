//! HTTP backend for the hotel API.
//!
//! Requests enter through `router`, pass the bearer-token check in `middleware` when the
//! route is protected, and reach a `controller` handler. Handlers turn request DTOs into
//! `model` params and call a `service`, which owns validation, password hashing, token
//! issuance and the reservation transaction. Services talk to the database only through
//! the repositories in `data`, which return domain models rather than SeaORM entities.
//!
//! `startup`, `config` and `state` wire this together at boot. `error` maps every failure
//! onto a JSON `{"error": ...}` body.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
