use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        schedule::{CreateScheduleDto, ScheduleDto},
    },
    server::{
        error::AppError,
        model::{
            auth::AuthUser,
            schedule::{CreateScheduleParams, RemoveShiftParams, RescheduleShiftParams, Schedule},
        },
        service::schedule::ScheduleService,
        state::AppState,
        util::{json::AppJson, path::AppPath},
    },
};

/// Tag for grouping staff schedule endpoints in OpenAPI documentation
pub static SCHEDULE_TAG: &str = "schedule";

/// Query parameters selecting a shift to remove.
///
/// Both fields are optional at the extractor level so that a missing parameter yields
/// the standard JSON 400 instead of axum's plain-text query rejection.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RemoveShiftQuery {
    pub shift_date: Option<String>,
    pub shift_time: Option<String>,
}

/// Query parameters selecting a day to move to a new time slot.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RescheduleShiftQuery {
    pub shift_date: Option<String>,
    pub new_shift_time: Option<String>,
}

/// Assign a shift to a staff member.
#[utoipa::path(
    post,
    path = "/schedule",
    tag = SCHEDULE_TAG,
    request_body = CreateScheduleDto,
    responses(
        (status = 201, description = "Shift assigned", body = ScheduleDto),
        (status = 400, description = "Invalid JSON", body = ErrorDto),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    _user: AuthUser,
    AppJson(payload): AppJson<CreateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ScheduleService::new(&state.db);

    let schedule = service
        .create(CreateScheduleParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(schedule.into_dto())))
}

/// List every assigned shift.
#[utoipa::path(
    get,
    path = "/schedules",
    tag = SCHEDULE_TAG,
    responses(
        (status = 200, description = "All shifts", body = Vec<ScheduleDto>),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_schedules(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let service = ScheduleService::new(&state.db);

    let schedules: Vec<ScheduleDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(Schedule::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(schedules)))
}

/// Remove a staff member's shift on a day.
///
/// # Returns
/// - `200 OK` - Shift removed
/// - `400 Bad Request` - `shift_date` or `shift_time` missing
/// - `401 Unauthorized` - Missing, invalid, or expired token
/// - `404 Not Found` - No shift matched
#[utoipa::path(
    delete,
    path = "/schedule/{staff_id}",
    tag = SCHEDULE_TAG,
    params(
        ("staff_id" = i32, Path, description = "Staff ID"),
        RemoveShiftQuery
    ),
    responses(
        (status = 200, description = "Shift removed", body = MessageDto),
        (status = 400, description = "Missing query parameters", body = ErrorDto),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn remove_shift(
    State(state): State<AppState>,
    _user: AuthUser,
    AppPath(staff_id): AppPath<i32>,
    Query(query): Query<RemoveShiftQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(shift_date), Some(shift_time)) = (
        non_empty(query.shift_date),
        non_empty(query.shift_time),
    ) else {
        return Err(AppError::BadRequest(
            "shift_date and shift_time are required".to_string(),
        ));
    };

    let service = ScheduleService::new(&state.db);

    service
        .remove_shift(RemoveShiftParams {
            staff_id,
            shift_date,
            shift_time,
        })
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Schedule removed"))))
}

/// Move a staff member's shift on a day to a new time slot.
///
/// # Returns
/// - `200 OK` - Shift time updated
/// - `400 Bad Request` - `shift_date` or `new_shift_time` missing
/// - `401 Unauthorized` - Missing, invalid, or expired token
/// - `404 Not Found` - No shift matched
#[utoipa::path(
    put,
    path = "/schedule/{staff_id}",
    tag = SCHEDULE_TAG,
    params(
        ("staff_id" = i32, Path, description = "Staff ID"),
        RescheduleShiftQuery
    ),
    responses(
        (status = 200, description = "Shift time updated", body = MessageDto),
        (status = 400, description = "Missing query parameters", body = ErrorDto),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn reschedule_shift(
    State(state): State<AppState>,
    _user: AuthUser,
    AppPath(staff_id): AppPath<i32>,
    Query(query): Query<RescheduleShiftQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(shift_date), Some(new_shift_time)) = (
        non_empty(query.shift_date),
        non_empty(query.new_shift_time),
    ) else {
        return Err(AppError::BadRequest(
            "shift_date and new_shift_time are required".to_string(),
        ));
    };

    let service = ScheduleService::new(&state.db);

    service
        .reschedule_shift(RescheduleShiftParams {
            staff_id,
            shift_date,
            new_shift_time,
        })
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Shift time updated"))))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
