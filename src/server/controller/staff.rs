use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        staff::{StaffDto, StaffSummaryDto},
    },
    server::{
        error::AppError,
        model::{auth::AuthUser, staff::Staff},
        service::staff::StaffService,
        state::AppState,
        util::path::AppPath,
    },
};

/// Tag for grouping staff endpoints in OpenAPI documentation
pub static STAFF_TAG: &str = "staff";

/// List the housekeeping roster.
#[utoipa::path(
    get,
    path = "/staffs",
    tag = STAFF_TAG,
    responses(
        (status = 200, description = "Housekeeping staff", body = Vec<StaffSummaryDto>),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_housekeeping_staff(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let service = StaffService::new(&state.db);

    let staff: Vec<StaffSummaryDto> = service
        .get_housekeeping()
        .await?
        .into_iter()
        .map(Staff::into_summary_dto)
        .collect();

    Ok((StatusCode::OK, Json(staff)))
}

/// Get a staff member by ID.
#[utoipa::path(
    get,
    path = "/staff/{id}",
    tag = STAFF_TAG,
    params(
        ("id" = i32, Path, description = "Staff ID")
    ),
    responses(
        (status = 200, description = "Staff member", body = StaffDto),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDto),
        (status = 404, description = "Staff not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_staff(
    State(state): State<AppState>,
    _user: AuthUser,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StaffService::new(&state.db);

    let staff = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(staff.into_dto())))
}
