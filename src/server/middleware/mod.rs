//! Request authentication.
//!
//! `auth` verifies bearer tokens on protected routes and stores the caller's identity in
//! the request extensions; `session` lets handlers extract that identity.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
