//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use super::appointment::AppointmentRepository;
use super::customer::CustomerRepository;
use super::employee::EmployeeRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let emp = repos.employees().find_by_email_or_username("ana@spa.test").await?;
///     let appts = repos.appointments().list_for_customer(7).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn employees(&self) -> &dyn EmployeeRepository;
    fn customers(&self) -> &dyn CustomerRepository;
    fn appointments(&self) -> &dyn AppointmentRepository;
}
