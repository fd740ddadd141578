//! Appointment handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use super::dto::{AppointmentDto, StaffCommentsRequest};
use crate::application::AppointmentService;
use crate::interfaces::http::common::{domain_error, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Appointment handler state
#[derive(Clone)]
pub struct AppointmentHandlerState {
    pub appointment_service: Arc<AppointmentService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/appointments",
    tag = "Appointments",
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Appointments for the signed-in account", body = ApiResponse<Vec<AppointmentDto>>),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn list_appointments(
    State(state): State<AppointmentHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<Vec<AppointmentDto>>>, ApiError<Vec<AppointmentDto>>> {
    let is_staff = user.is_employee();
    let items = state
        .appointment_service
        .list_for(user.user_type, user.account_id)
        .await
        .map_err(domain_error)?
        .into_iter()
        .map(|a| AppointmentDto::for_viewer(a, is_staff))
        .collect();

    Ok(Json(ApiResponse::success(items)))
}

#[utoipa::path(
    get,
    path = "/api/v1/appointments/{id}",
    tag = "Appointments",
    security(("session_cookie" = [])),
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment", body = ApiResponse<AppointmentDto>),
        (status = 403, description = "Booked by another customer"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_appointment(
    State(state): State<AppointmentHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<AppointmentDto>>, ApiError<AppointmentDto>> {
    let appointment = state
        .appointment_service
        .get_for(user.user_type, user.account_id, id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(AppointmentDto::for_viewer(
        appointment,
        user.is_employee(),
    ))))
}

#[utoipa::path(
    put,
    path = "/api/v1/appointments/{id}/staff-comments",
    tag = "Appointments",
    security(("session_cookie" = [])),
    params(("id" = i32, Path, description = "Appointment ID")),
    request_body = StaffCommentsRequest,
    responses(
        (status = 200, description = "Comments saved", body = ApiResponse<AppointmentDto>),
        (status = 403, description = "Staff only"),
        (status = 404, description = "Not found"),
        (status = 422, description = "Comments too long")
    )
)]
pub async fn set_staff_comments(
    State(state): State<AppointmentHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<StaffCommentsRequest>,
) -> Result<Json<ApiResponse<AppointmentDto>>, ApiError<AppointmentDto>> {
    user.require_employee()?;

    let updated = state
        .appointment_service
        .set_staff_comments(id, request.staff_comments)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(AppointmentDto::for_viewer(
        updated, true,
    ))))
}
