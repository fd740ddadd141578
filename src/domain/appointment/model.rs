use chrono::{DateTime, Utc};

use crate::domain::{DomainError, DomainResult};

/// Column limit for `appointments.staff_comments`, in characters
pub const STAFF_COMMENTS_MAX_LEN: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub appointment_id: i32,
    pub customer_id: i32,
    pub employee_id: i32,
    pub service_name: String,
    pub scheduled_at: DateTime<Utc>,
    pub status: AppointmentStatus,
    /// Notes entered by the customer when booking
    pub notes: Option<String>,
    /// Internal notes left by staff; never shown to the customer
    pub staff_comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn is_for_customer(&self, customer_id: i32) -> bool {
        self.customer_id == customer_id
    }

    pub fn is_assigned_to(&self, employee_id: i32) -> bool {
        self.employee_id == employee_id
    }
}

/// Trim staff comments; blank input clears the column.
pub fn normalize_staff_comments(input: Option<String>) -> DomainResult<Option<String>> {
    let Some(raw) = input else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.chars().count() > STAFF_COMMENTS_MAX_LEN {
        return Err(DomainError::Validation(format!(
            "Staff comments must be at most {} characters",
            STAFF_COMMENTS_MAX_LEN
        )));
    }
    Ok(Some(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_comments_clear_the_column() {
        assert_eq!(normalize_staff_comments(None).unwrap(), None);
        assert_eq!(normalize_staff_comments(Some("   ".into())).unwrap(), None);
    }

    #[test]
    fn comments_are_trimmed() {
        assert_eq!(
            normalize_staff_comments(Some("  prefers lavender oil \n".into())).unwrap(),
            Some("prefers lavender oil".to_string())
        );
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let at_limit = "é".repeat(STAFF_COMMENTS_MAX_LEN);
        assert!(normalize_staff_comments(Some(at_limit)).is_ok());

        let over = "a".repeat(STAFF_COMMENTS_MAX_LEN + 1);
        assert!(matches!(
            normalize_staff_comments(Some(over)),
            Err(DomainError::Validation(_))
        ));
    }
}
