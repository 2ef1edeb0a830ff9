use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        payment::{PaymentDto, PaymentPayloadDto},
    },
    server::{
        error::AppError,
        model::{
            auth::AuthUser,
            payment::{Payment, PaymentParams},
        },
        service::payment::PaymentService,
        state::AppState,
        util::{json::AppJson, path::AppPath},
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Record a payment against a reservation.
///
/// The transaction date is set by the server.
#[utoipa::path(
    post,
    path = "/payments",
    tag = PAYMENT_TAG,
    request_body = PaymentPayloadDto,
    responses(
        (status = 201, description = "Payment recorded", body = PaymentDto),
        (status = 400, description = "Invalid JSON", body = ErrorDto),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_payment(
    State(state): State<AppState>,
    _user: AuthUser,
    AppJson(payload): AppJson<PaymentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaymentService::new(&state.db);

    let payment = service.create(PaymentParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(payment.into_dto())))
}

/// List all payments.
#[utoipa::path(
    get,
    path = "/payments",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "All payments", body = Vec<PaymentDto>),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_payments(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let service = PaymentService::new(&state.db);

    let payments: Vec<PaymentDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(Payment::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(payments)))
}

/// Get a payment by ID.
#[utoipa::path(
    get,
    path = "/payments/{id}",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Payment", body = PaymentDto),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_payment(
    State(state): State<AppState>,
    _user: AuthUser,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaymentService::new(&state.db);

    let payment = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}

/// Replace a payment's details.
#[utoipa::path(
    put,
    path = "/payments/{id}",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Payment ID")
    ),
    request_body = PaymentPayloadDto,
    responses(
        (status = 200, description = "Updated payment", body = PaymentDto),
        (status = 400, description = "Invalid JSON", body = ErrorDto),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_payment(
    State(state): State<AppState>,
    _user: AuthUser,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<PaymentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaymentService::new(&state.db);

    let payment = service
        .update(id, PaymentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}

/// Delete a payment.
#[utoipa::path(
    delete,
    path = "/payments/{id}",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Payment deleted", body = MessageDto),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_payment(
    State(state): State<AppState>,
    _user: AuthUser,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaymentService::new(&state.db);

    service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Payment deleted successfully")),
    ))
}
