use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use iceapple_core::AppError;
use tracing::instrument;

use crate::middleware::auth::AccessToken;
use crate::modules::reservations::model::{
    AdminReservationRequest, ApiMessageResponse, ReservationDateQuery, ReservationsResponse,
};
use crate::modules::reservations::service::ReservationService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/admin/reservations",
    params(ReservationDateQuery),
    responses(
        (status = 200, description = "Reservations on the given date", body = ReservationsResponse),
        (status = 400, description = "Missing or malformed date", body = iceapple_core::ErrorResponse),
        (status = 401, description = "No access token cookie", body = iceapple_core::ErrorResponse)
    ),
    tag = "Reservations",
    security(("access_token" = []))
)]
#[instrument(skip(state))]
pub async fn get_all_reservations(
    State(state): State<AppState>,
    _token: AccessToken,
    query: Result<Query<ReservationDateQuery>, QueryRejection>,
) -> Result<Json<ReservationsResponse>, AppError> {
    let Query(query) =
        query.map_err(|_| AppError::bad_request(anyhow!("date must be given as YYYY-MM-DD")))?;

    let reservations =
        ReservationService::get_reservations_by_date(&state.reservations, query.date).await?;

    Ok(Json(ReservationsResponse { reservations }))
}

#[utoipa::path(
    post,
    path = "/admin/reservations",
    request_body = AdminReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ApiMessageResponse),
        (status = 400, description = "Invalid input or time slot taken", body = iceapple_core::ErrorResponse),
        (status = 401, description = "No access token cookie", body = iceapple_core::ErrorResponse)
    ),
    tag = "Reservations",
    security(("access_token" = []))
)]
#[instrument(skip(state))]
pub async fn create_reservation(
    State(state): State<AppState>,
    _token: AccessToken,
    ValidatedJson(request): ValidatedJson<AdminReservationRequest>,
) -> Result<(StatusCode, Json<ApiMessageResponse>), AppError> {
    ReservationService::create_reservation(&state.reservations, request).await?;

    Ok((StatusCode::CREATED, Json(ApiMessageResponse::new("created"))))
}

#[utoipa::path(
    patch,
    path = "/admin/reservations/{reservation_id}",
    params(
        ("reservation_id" = String, Path, description = "Reservation ID")
    ),
    request_body = AdminReservationRequest,
    responses(
        (status = 200, description = "Reservation updated", body = ApiMessageResponse),
        (status = 400, description = "Invalid input, unknown reservation or time slot taken", body = iceapple_core::ErrorResponse),
        (status = 401, description = "No access token cookie", body = iceapple_core::ErrorResponse)
    ),
    tag = "Reservations",
    security(("access_token" = []))
)]
#[instrument(skip(state))]
pub async fn update_reservation(
    State(state): State<AppState>,
    _token: AccessToken,
    Path(reservation_id): Path<String>,
    ValidatedJson(request): ValidatedJson<AdminReservationRequest>,
) -> Result<Json<ApiMessageResponse>, AppError> {
    ReservationService::update_reservation(&state.reservations, &reservation_id, request).await?;

    Ok(Json(ApiMessageResponse::new("updated")))
}

#[utoipa::path(
    delete,
    path = "/admin/reservations/{reservation_id}",
    params(
        ("reservation_id" = String, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation cancelled", body = ApiMessageResponse),
        (status = 400, description = "Unknown reservation", body = iceapple_core::ErrorResponse),
        (status = 401, description = "No access token cookie", body = iceapple_core::ErrorResponse)
    ),
    tag = "Reservations",
    security(("access_token" = []))
)]
#[instrument(skip(state))]
pub async fn delete_reservation(
    State(state): State<AppState>,
    _token: AccessToken,
    Path(reservation_id): Path<String>,
) -> Result<Json<ApiMessageResponse>, AppError> {
    ReservationService::cancel_reservations(&state.reservations, &[reservation_id]).await?;

    Ok(Json(ApiMessageResponse::new("deleted")))
}
