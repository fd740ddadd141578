//! Employee aggregate
//!
//! Staff accounts. Besides identity and contact data an employee carries a job
//! title and the city/state shown as their profile location.

pub mod model;
pub mod repository;

pub use model::Employee;
pub use repository::EmployeeRepository;
