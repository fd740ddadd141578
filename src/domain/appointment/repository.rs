//! Appointment repository interface

use async_trait::async_trait;

use super::model::Appointment;
use crate::domain::DomainResult;

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Find appointment by ID
    async fn find_by_id(&self, appointment_id: i32) -> DomainResult<Option<Appointment>>;

    /// Appointments assigned to an employee, earliest first
    async fn list_for_employee(&self, employee_id: i32) -> DomainResult<Vec<Appointment>>;

    /// Appointments booked by a customer, earliest first
    async fn list_for_customer(&self, customer_id: i32) -> DomainResult<Vec<Appointment>>;

    /// Overwrite `staff_comments`. Returns the updated row, or `None` if the
    /// appointment does not exist.
    async fn set_staff_comments(
        &self,
        appointment_id: i32,
        comments: Option<String>,
    ) -> DomainResult<Option<Appointment>>;
}
