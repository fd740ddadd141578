//! Common API types shared by all handlers

mod validated_json;

pub use validated_json::{ValidatedJson, ValidatedJsonRejection};

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Standard API response envelope
///
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "data": null, "error": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Error half of every handler's `Result`
pub type ApiError<T> = (StatusCode, Json<ApiResponse<T>>);

pub fn api_error<T>(status: StatusCode, message: impl Into<String>) -> ApiError<T> {
    (status, Json(ApiResponse::error(message)))
}

/// Map a domain error onto an HTTP status inside the envelope.
///
/// Database failures are logged here and reported without internals.
pub fn domain_error<T>(e: DomainError) -> ApiError<T> {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::Database(msg) => {
            error!("Database failure: {}", msg);
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    };
    api_error(status, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_omits_data() {
        let body = serde_json::to_value(ApiResponse::<()>::error("nope")).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "nope");
        assert!(body["data"].is_null());
    }

    #[test]
    fn success_envelope_has_no_error_key() {
        let body = serde_json::to_value(ApiResponse::success(5)).unwrap();
        assert_eq!(body["data"], 5);
        assert!(body.get("error").is_none());
    }

    #[test]
    fn domain_errors_map_to_statuses() {
        let (status, _) = domain_error::<()>(DomainError::not_found("Appointment", "id", 1));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = domain_error::<()>(DomainError::Forbidden("x".into()));
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, Json(body)) = domain_error::<()>(DomainError::Database("secret detail".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.as_deref(), Some("Internal server error"));
    }
}
