//! HTTP interfaces
//!
//! - `common`: response envelope, error mapping, validated JSON extractor
//! - `session`: session cookie encoding
//! - `middleware`: cookie session authentication
//! - `modules`: request handlers grouped by resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod session;

pub use router::{create_api_router, ApiDoc, AppState};
