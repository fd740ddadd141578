//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod appointment_repository;
pub mod customer_repository;
pub mod employee_repository;
pub mod repository_provider;

pub use repository_provider::SeaOrmRepositoryProvider;
