//! Application layer — use cases orchestrated over the domain repositories

pub mod appointments;
pub mod identity;
pub mod profile;

#[cfg(test)]
pub(crate) mod testing;

pub use appointments::AppointmentService;
pub use identity::{AuthResult, AuthService};
pub use profile::{UpdateOutcome, UserService};
