//! Auth module — sign-in, sign-out and the current session

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
