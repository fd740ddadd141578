//! Appointments module — reading bookings and staff comments

pub mod service;

pub use service::AppointmentService;
