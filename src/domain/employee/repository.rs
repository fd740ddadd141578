//! Employee repository interface

use async_trait::async_trait;

use super::model::Employee;
use crate::domain::DomainResult;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find employee by primary key
    async fn find_by_id(&self, employee_id: i32) -> DomainResult<Option<Employee>>;

    /// Find the first employee whose email or username equals `key` exactly
    async fn find_by_email_or_username(&self, key: &str) -> DomainResult<Option<Employee>>;

    /// Persist the profile-editable fields: names, phone, city and state.
    ///
    /// Username, email, job title and password hash are left untouched.
    /// Returns `false` if no row has this id.
    async fn save_profile(&self, employee: &Employee) -> DomainResult<bool>;
}
