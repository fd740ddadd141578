use std::sync::Arc;

use tracing::info;

use crate::domain::{
    normalize_staff_comments, Appointment, DomainError, DomainResult, RepositoryProvider,
    UserType,
};

pub struct AppointmentService {
    repos: Arc<dyn RepositoryProvider>,
}

impl AppointmentService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn get(&self, appointment_id: i32) -> DomainResult<Option<Appointment>> {
        self.repos.appointments().find_by_id(appointment_id).await
    }

    pub async fn list_for_employee(&self, employee_id: i32) -> DomainResult<Vec<Appointment>> {
        self.repos.appointments().list_for_employee(employee_id).await
    }

    pub async fn list_for_customer(&self, customer_id: i32) -> DomainResult<Vec<Appointment>> {
        self.repos.appointments().list_for_customer(customer_id).await
    }

    /// Appointments visible to an account: assigned ones for employees,
    /// booked ones for customers.
    pub async fn list_for(&self, user_type: UserType, account_id: i32) -> DomainResult<Vec<Appointment>> {
        match user_type {
            UserType::Employee => self.list_for_employee(account_id).await,
            UserType::Customer => self.list_for_customer(account_id).await,
        }
    }

    /// Fetch one appointment on behalf of an account. Customers may only see
    /// their own bookings; employees see all.
    pub async fn get_for(
        &self,
        user_type: UserType,
        account_id: i32,
        appointment_id: i32,
    ) -> DomainResult<Appointment> {
        let appointment = self
            .get(appointment_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Appointment", "appointment_id", appointment_id))?;

        if user_type == UserType::Customer && !appointment.is_for_customer(account_id) {
            return Err(DomainError::Forbidden(
                "Appointment belongs to another customer".into(),
            ));
        }
        Ok(appointment)
    }

    /// Set or clear the staff comments on an appointment.
    pub async fn set_staff_comments(
        &self,
        appointment_id: i32,
        comments: Option<String>,
    ) -> DomainResult<Appointment> {
        let comments = normalize_staff_comments(comments)?;
        let cleared = comments.is_none();

        let updated = self
            .repos
            .appointments()
            .set_staff_comments(appointment_id, comments)
            .await?
            .ok_or_else(|| DomainError::not_found("Appointment", "appointment_id", appointment_id))?;

        info!(appointment_id, cleared, "Staff comments updated");
        Ok(updated)
    }
}
