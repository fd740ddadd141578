//! Cookie session authentication middleware for Axum

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use jsonwebtoken::errors::ErrorKind;
use tracing::debug;

use super::common::{api_error, ApiError, ApiResponse};
use super::session::{read_session_token, SessionSettings};
use crate::domain::UserType;
use crate::infrastructure::crypto::jwt::{verify_token, SessionClaims};

/// Authentication error types
#[derive(Debug)]
pub enum AuthError {
    MissingSession,
    InvalidSession,
    ExpiredSession,
}

/// Signed-in account, attached to the request by [`session_middleware`]
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_type: UserType,
    pub account_id: i32,
    pub username: String,
    pub email: String,
    pub expires_at: i64,
}

impl AuthenticatedUser {
    pub fn from_claims(claims: SessionClaims) -> Option<Self> {
        let (user_type, account_id) = claims.account()?;
        Some(Self {
            user_type,
            account_id,
            username: claims.username,
            email: claims.email,
            expires_at: claims.exp,
        })
    }

    pub fn is_employee(&self) -> bool {
        self.user_type == UserType::Employee
    }

    /// Gate for staff-only handlers
    pub fn require_employee<T>(&self) -> Result<(), ApiError<T>> {
        if self.is_employee() {
            Ok(())
        } else {
            Err(api_error(StatusCode::FORBIDDEN, "Only staff can do this"))
        }
    }
}

/// Rejects requests without a valid session cookie
pub async fn session_middleware(
    State(settings): State<SessionSettings>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let jar = CookieJar::from_headers(request.headers());
    let Some(token) = read_session_token(&jar) else {
        return auth_error_response(AuthError::MissingSession);
    };

    let claims = match verify_token(&token, &settings.jwt_config) {
        Ok(claims) => claims,
        Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => {
            return auth_error_response(AuthError::ExpiredSession);
        }
        Err(e) => {
            debug!("Rejected session token: {}", e);
            return auth_error_response(AuthError::InvalidSession);
        }
    };

    let Some(user) = AuthenticatedUser::from_claims(claims) else {
        return auth_error_response(AuthError::InvalidSession);
    };

    request.extensions_mut().insert(user);
    next.run(request).await
}

pub fn auth_error_response(error: AuthError) -> Response {
    let (status, message) = match error {
        AuthError::MissingSession => (StatusCode::UNAUTHORIZED, "Not signed in"),
        AuthError::InvalidSession => (StatusCode::UNAUTHORIZED, "Invalid session"),
        AuthError::ExpiredSession => (StatusCode::UNAUTHORIZED, "Session has expired"),
    };

    (status, Json(ApiResponse::<()>::error(message))).into_response()
}
