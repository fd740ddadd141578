//! Appointment aggregate
//!
//! Contains the Appointment entity, its status, and the repository interface.

pub mod model;
pub mod repository;

pub use model::{
    normalize_staff_comments, Appointment, AppointmentStatus, STAFF_COMMENTS_MAX_LEN,
};
pub use repository::AppointmentRepository;
