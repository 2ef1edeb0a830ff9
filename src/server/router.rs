//! Route table and OpenAPI document.
//!
//! Registration, login and the OpenAPI document are public. Every other route is mounted
//! on a sub-router guarded by `require_auth`, so handlers behind it can rely on an
//! `AuthUser` being present.

use axum::{
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::server::{
    controller::{
        auth::{login, profile, register},
        guest::{create_guest, delete_guest, get_guest, get_guests, update_guest},
        payment::{create_payment, delete_payment, get_payment, get_payments, update_payment},
        reservation::create_reservation,
        room::get_available_rooms,
        schedule::{create_schedule, get_schedules, remove_shift, reschedule_shift},
        staff::{get_housekeeping_staff, get_staff},
    },
    middleware::auth::require_auth,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Hotel Backend", description = "Hotel management API"),
    paths(
        crate::server::controller::auth::register,
        crate::server::controller::auth::login,
        crate::server::controller::auth::profile,
        crate::server::controller::reservation::create_reservation,
        crate::server::controller::guest::create_guest,
        crate::server::controller::guest::get_guests,
        crate::server::controller::guest::get_guest,
        crate::server::controller::guest::update_guest,
        crate::server::controller::guest::delete_guest,
        crate::server::controller::payment::create_payment,
        crate::server::controller::payment::get_payments,
        crate::server::controller::payment::get_payment,
        crate::server::controller::payment::update_payment,
        crate::server::controller::payment::delete_payment,
        crate::server::controller::staff::get_housekeeping_staff,
        crate::server::controller::staff::get_staff,
        crate::server::controller::schedule::create_schedule,
        crate::server::controller::schedule::get_schedules,
        crate::server::controller::schedule::remove_shift,
        crate::server::controller::schedule::reschedule_shift,
        crate::server::controller::room::get_available_rooms,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and token identity"),
        (name = "reservation", description = "Room bookings"),
        (name = "guest", description = "Guest records"),
        (name = "payment", description = "Payments against reservations"),
        (name = "staff", description = "Staff directory"),
        (name = "schedule", description = "Staff shift schedule"),
        (name = "room", description = "Room availability"),
    )
)]
pub struct ApiDoc;

/// Registers the bearer token scheme referenced by protected paths.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/profile", get(profile))
        .route("/reservations", post(create_reservation))
        .route("/guests", get(get_guests).post(create_guest))
        .route(
            "/guests/{id}",
            get(get_guest).put(update_guest).delete(delete_guest),
        )
        .route("/payments", get(get_payments).post(create_payment))
        .route(
            "/payments/{id}",
            get(get_payment).put(update_payment).delete(delete_payment),
        )
        .route("/staffs", get(get_housekeeping_staff))
        .route("/staff/{id}", get(get_staff))
        .route("/schedule", post(create_schedule))
        .route("/schedules", get(get_schedules))
        .route(
            "/schedule/{staff_id}",
            delete(remove_shift).put(reschedule_shift),
        )
        .route("/rooms/{room_type}", get(get_available_rooms))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(protected)
}

#[cfg(test)]
mod test;
