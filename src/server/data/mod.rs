//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories that take part in reservation intake are generic over `ConnectionTrait` so
//! the same code runs against a pooled connection or an open transaction.

pub mod guest;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod schedule;
pub mod staff;
pub mod user;

#[cfg(test)]
mod test;
