//! Unified profile view
//!
//! Employees and customers live in separate tables but are presented to the
//! site as a single `User` shape. The `user_type` discriminator records which
//! table a view came from so updates can be routed back to it.

pub mod model;

pub use model::{split_location, User, UserType, CUSTOMER_JOB_TITLE, CUSTOMER_LOCATION};
