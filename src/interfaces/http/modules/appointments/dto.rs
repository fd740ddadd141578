//! Appointment DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Appointment, STAFF_COMMENTS_MAX_LEN};

#[derive(Debug, Serialize, ToSchema)]
pub struct AppointmentDto {
    pub id: i32,
    pub customer_id: i32,
    pub employee_id: i32,
    pub service_name: String,
    pub scheduled_at: DateTime<Utc>,
    /// `Scheduled`, `Completed` or `Cancelled`
    pub status: String,
    pub notes: Option<String>,
    /// Only present for staff
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AppointmentDto {
    /// Customers never see staff comments.
    pub fn for_viewer(a: Appointment, is_staff: bool) -> Self {
        Self {
            id: a.appointment_id,
            customer_id: a.customer_id,
            employee_id: a.employee_id,
            service_name: a.service_name,
            scheduled_at: a.scheduled_at,
            status: a.status.as_str().to_string(),
            notes: a.notes,
            staff_comments: if is_staff { a.staff_comments } else { None },
            created_at: a.created_at,
        }
    }
}

/// Body for setting staff comments. `null` or blank clears them.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct StaffCommentsRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_comment_length"))]
    pub staff_comments: Option<String>,
}

fn validate_comment_length(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().chars().count() > STAFF_COMMENTS_MAX_LEN {
        let mut err = validator::ValidationError::new("length");
        err.message = Some(
            format!(
                "staff_comments must be at most {} characters",
                STAFF_COMMENTS_MAX_LEN
            )
            .into(),
        );
        return Err(err);
    }
    Ok(())
}
