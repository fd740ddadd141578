//! # Spa Booking Service
//!
//! Backend for a spa and beauty salon booking site: cookie-session sign-in,
//! appointment records with staff comments, and a single profile view over
//! the employee and customer account tables.
//!
//! ## Architecture
//!
//! - **domain**: records, the `User` profile view, repository traits
//! - **application**: `UserService`, `AuthService`, `AppointmentService`
//! - **infrastructure**: SeaORM entities, migrations and repositories; bcrypt and JWT
//! - **interfaces**: axum HTTP API with Swagger documentation
//! - **shared**: error types and graceful shutdown
//! - **server**: process lifecycle shared by both binaries

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

pub use interfaces::http::create_api_router;
