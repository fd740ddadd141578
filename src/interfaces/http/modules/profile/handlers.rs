//! Profile handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{ProfileDto, UpdateProfileRequest, UpdateProfileResponse};
use crate::application::UserService;
use crate::domain::User;
use crate::interfaces::http::common::{
    api_error, domain_error, ApiError, ApiResponse, ValidatedJson,
};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Profile handler state
#[derive(Clone)]
pub struct ProfileHandlerState {
    pub user_service: Arc<UserService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/profile",
    tag = "Profile",
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Own profile", body = ApiResponse<ProfileDto>),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "Account no longer exists")
    )
)]
pub async fn get_own_profile(
    State(state): State<ProfileHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<ProfileDto>>, ApiError<ProfileDto>> {
    match state
        .user_service
        .get_profile_by_id(user.user_type, user.account_id)
        .await
        .map_err(domain_error)?
    {
        Some(profile) => Ok(Json(ApiResponse::success(profile.into()))),
        None => Err(api_error(StatusCode::NOT_FOUND, "Profile not found")),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/profile",
    tag = "Profile",
    security(("session_cookie" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Update processed", body = ApiResponse<UpdateProfileResponse>),
        (status = 401, description = "Not signed in"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_own_profile(
    State(state): State<ProfileHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UpdateProfileResponse>>, ApiError<UpdateProfileResponse>> {
    // id and user_type always come from the session
    let profile = User {
        id: user.account_id,
        first_name: request.first_name,
        last_name: request.last_name,
        username: user.username.clone(),
        email: user.email.clone(),
        phone: request.phone,
        job_title: String::new(),
        location: request.location.unwrap_or_default(),
        user_type: user.user_type.as_str().to_string(),
    };

    let outcome = state
        .user_service
        .update_profile(&profile)
        .await
        .map_err(domain_error)?;

    let refreshed = if outcome.is_saved() {
        state
            .user_service
            .get_profile_by_id(user.user_type, user.account_id)
            .await
            .map_err(domain_error)?
            .map(ProfileDto::from)
    } else {
        None
    };

    Ok(Json(ApiResponse::success(UpdateProfileResponse {
        saved: outcome.is_saved(),
        profile: refreshed,
    })))
}

#[utoipa::path(
    get,
    path = "/api/v1/profiles/{key}",
    tag = "Profile",
    security(("session_cookie" = [])),
    params(("key" = String, Path, description = "Email or username")),
    responses(
        (status = 200, description = "Profile found", body = ApiResponse<ProfileDto>),
        (status = 403, description = "Staff only"),
        (status = 404, description = "No employee or customer matches")
    )
)]
pub async fn get_profile_by_key(
    State(state): State<ProfileHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(key): Path<String>,
) -> Result<Json<ApiResponse<ProfileDto>>, ApiError<ProfileDto>> {
    user.require_employee()?;

    match state
        .user_service
        .get_profile(&key)
        .await
        .map_err(domain_error)?
    {
        Some(profile) => Ok(Json(ApiResponse::success(profile.into()))),
        None => Err(api_error(
            StatusCode::NOT_FOUND,
            format!("No profile matches '{}'", key),
        )),
    }
}
