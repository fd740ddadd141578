//! Profile module — unified employee/customer profile lookup and update

pub mod service;

pub use service::{UpdateOutcome, UserService};
