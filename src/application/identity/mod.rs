//! Identity module — cookie-session authentication
//!
//! `AuthService` checks credentials against the employee and customer tables
//! and issues the signed token stored in the session cookie.

pub mod service;

pub use service::{AuthResult, AuthService};
