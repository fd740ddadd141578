//! Profile DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::User;

/// Merged employee/customer profile
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub job_title: String,
    /// `"City, State"` for employees, `"Online"` for customers
    pub location: String,
    /// `"Employee"` or `"Customer"`
    pub user_type: String,
}

impl From<User> for ProfileDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            username: u.username,
            email: u.email,
            phone: u.phone,
            job_title: u.job_title,
            location: u.location,
            user_type: u.user_type,
        }
    }
}

/// Editable profile fields. Username and email cannot be changed here.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "first_name must be 1-100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "last_name must be 1-100 characters"))]
    pub last_name: String,
    #[validate(length(max = 30, message = "phone must be at most 30 characters"))]
    pub phone: String,
    /// `"City, State"`; only applied to employee profiles
    #[serde(default)]
    #[validate(length(max = 200))]
    pub location: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateProfileResponse {
    /// `false` when the update was skipped (e.g. the account no longer exists)
    pub saved: bool,
    pub profile: Option<ProfileDto>,
}
