//! Authentication handlers
//!
//! Login stores the session token in an HttpOnly cookie; `/logout` clears it
//! and sends the browser back to the site root.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
    Extension, Json,
};
use axum_extra::extract::cookie::CookieJar;

use super::dto::{LoginRequest, LoginResponse, SessionInfo};
use crate::application::AuthService;
use crate::interfaces::http::common::{domain_error, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::modules::profile::ProfileDto;
use crate::interfaces::http::session::SessionSettings;

/// Auth handler state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub auth_service: Arc<AuthService>,
    pub session: SessionSettings,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in; session cookie set", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), ApiError<LoginResponse>> {
    let result = state
        .auth_service
        .login(&request.username, &request.password)
        .await
        .map_err(domain_error)?;

    let cookie = state.session.session_cookie(result.token);
    let body = LoginResponse {
        expires_in: result.expires_in,
        user: ProfileDto::from(result.user),
    };

    Ok((jar.add(cookie), Json(ApiResponse::success(body))))
}

#[utoipa::path(
    get,
    path = "/logout",
    tag = "Authentication",
    responses(
        (status = 303, description = "Session cookie cleared; redirect to /")
    )
)]
pub async fn logout(State(state): State<AuthHandlerState>, jar: CookieJar) -> impl IntoResponse {
    (state.session.sign_out(jar), Redirect::to("/"))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Authentication",
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Current session", body = ApiResponse<SessionInfo>),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn current_session(
    Extension(user): Extension<AuthenticatedUser>,
) -> Json<ApiResponse<SessionInfo>> {
    Json(ApiResponse::success(SessionInfo {
        user_type: user.user_type.as_str().to_string(),
        account_id: user.account_id,
        username: user.username,
        email: user.email,
        expires_at: user.expires_at,
    }))
}
