//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Handling multi-step operations such as reservation intake

pub mod auth;
pub mod guest;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod schedule;
pub mod staff;
pub mod token;

#[cfg(test)]
mod test;
