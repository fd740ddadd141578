//! Database entities module

pub mod appointment;
pub mod customer;
pub mod employee;

pub use appointment::Entity as Appointment;
pub use customer::Entity as Customer;
pub use employee::Entity as Employee;
