use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::error::{auth::AuthError, AppError};

mod auth;
mod reservation;
mod schedule;
