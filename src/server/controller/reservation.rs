use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        reservation::{CreateReservationDto, ReservationDto},
    },
    server::{
        error::AppError,
        model::{auth::AuthUser, reservation::CreateReservationParams},
        service::reservation::ReservationService,
        state::AppState,
        util::json::AppJson,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

/// Book a room.
///
/// Resolves `guest_id` to an existing guest or, when no guest has that ID, creates one
/// from `first_name`, `last_name` and `email` with a placeholder phone number. The
/// reservation is always owned by the authenticated caller.
///
/// # Returns
/// - `201 Created` - Reservation with its assigned ID and the resolved guest
/// - `400 Bad Request` - Invalid JSON
/// - `401 Unauthorized` - Missing, invalid, or expired token
/// - `500 Internal Server Error` - Database error; nothing is persisted
#[utoipa::path(
    post,
    path = "/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Reservation created", body = ReservationDto),
        (status = 400, description = "Invalid JSON", body = ErrorDto),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(payload): AppJson<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReservationService::new(&state.db);

    let params = CreateReservationParams::from_dto(payload);

    let reservation = service.create(user.user_id, params).await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}
