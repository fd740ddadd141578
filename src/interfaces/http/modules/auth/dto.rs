//! Authentication DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::interfaces::http::modules::profile::ProfileDto;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Username or email
    #[validate(length(min = 1, max = 255, message = "username or email is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Session lifetime in seconds
    pub expires_in: i64,
    pub user: ProfileDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionInfo {
    pub user_type: String,
    pub account_id: i32,
    pub username: String,
    pub email: String,
    /// Unix timestamp
    pub expires_at: i64,
}
