use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, room::RoomDto},
    server::{
        error::AppError,
        model::{auth::AuthUser, room::Room},
        service::room::RoomService,
        state::AppState,
        util::path::AppPath,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "room";

/// List available rooms of a type.
#[utoipa::path(
    get,
    path = "/rooms/{room_type}",
    tag = ROOM_TAG,
    params(
        ("room_type" = String, Path, description = "Room type, e.g. \"Single\" or \"Suite\"")
    ),
    responses(
        (status = 200, description = "Available rooms of the type", body = Vec<RoomDto>),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_available_rooms(
    State(state): State<AppState>,
    _user: AuthUser,
    AppPath(room_type): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = RoomService::new(&state.db);

    let rooms: Vec<RoomDto> = service
        .get_available(&room_type)
        .await?
        .into_iter()
        .map(Room::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(rooms)))
}
