use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        guest::{GuestDto, GuestPayloadDto},
    },
    server::{
        error::AppError,
        model::{
            auth::AuthUser,
            guest::{CreateGuestParams, Guest, UpdateGuestParams},
        },
        service::guest::GuestService,
        state::AppState,
        util::{json::AppJson, path::AppPath},
    },
};

/// Tag for grouping guest endpoints in OpenAPI documentation
pub static GUEST_TAG: &str = "guest";

/// Create a guest owned by the caller.
#[utoipa::path(
    post,
    path = "/guests",
    tag = GUEST_TAG,
    request_body = GuestPayloadDto,
    responses(
        (status = 201, description = "Guest created", body = GuestDto),
        (status = 400, description = "Invalid JSON", body = ErrorDto),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_guest(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(payload): AppJson<GuestPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GuestService::new(&state.db);

    let params = CreateGuestParams::from_dto(user.user_id, payload);

    let guest = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(guest.into_dto())))
}

/// List all guests.
#[utoipa::path(
    get,
    path = "/guests",
    tag = GUEST_TAG,
    responses(
        (status = 200, description = "All guests", body = Vec<GuestDto>),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_guests(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let service = GuestService::new(&state.db);

    let guests: Vec<GuestDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(Guest::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(guests)))
}

/// Get a guest by ID.
#[utoipa::path(
    get,
    path = "/guests/{id}",
    tag = GUEST_TAG,
    params(
        ("id" = i32, Path, description = "Guest ID")
    ),
    responses(
        (status = 200, description = "Guest", body = GuestDto),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDto),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_guest(
    State(state): State<AppState>,
    _user: AuthUser,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = GuestService::new(&state.db);

    let guest = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(guest.into_dto())))
}

/// Replace a guest's contact details.
///
/// The owning account is never changed.
#[utoipa::path(
    put,
    path = "/guests/{id}",
    tag = GUEST_TAG,
    params(
        ("id" = i32, Path, description = "Guest ID")
    ),
    request_body = GuestPayloadDto,
    responses(
        (status = 200, description = "Updated guest", body = GuestDto),
        (status = 400, description = "Invalid JSON", body = ErrorDto),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDto),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_guest(
    State(state): State<AppState>,
    _user: AuthUser,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<GuestPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GuestService::new(&state.db);

    let guest = service
        .update(UpdateGuestParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(guest.into_dto())))
}

/// Delete a guest.
#[utoipa::path(
    delete,
    path = "/guests/{id}",
    tag = GUEST_TAG,
    params(
        ("id" = i32, Path, description = "Guest ID")
    ),
    responses(
        (status = 200, description = "Guest deleted", body = MessageDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDto),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 409, description = "Guest has reservations", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_guest(
    State(state): State<AppState>,
    _user: AuthUser,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = GuestService::new(&state.db);

    service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Guest deleted successfully")),
    ))
}
