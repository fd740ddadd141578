//! Domain layer
//!
//! Plain records for the two account tables (employees, customers), the
//! appointment aggregate, and the unified `User` profile view that merges the
//! two account kinds. Repository traits live next to each aggregate.

pub mod appointment;
pub mod customer;
pub mod employee;
pub mod profile;
pub mod repositories;

pub use appointment::{
    normalize_staff_comments, Appointment, AppointmentRepository, AppointmentStatus,
    STAFF_COMMENTS_MAX_LEN,
};
pub use customer::{Customer, CustomerRepository};
pub use employee::{Employee, EmployeeRepository};
pub use profile::{split_location, User, UserType, CUSTOMER_JOB_TITLE, CUSTOMER_LOCATION};
pub use repositories::{DomainResult, RepositoryProvider};

pub use crate::shared::errors::DomainError;
