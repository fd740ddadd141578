//! Profile module — resolve and update employee/customer profiles

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
