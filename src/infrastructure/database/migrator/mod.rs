//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20251201_000001_create_employees;
mod m20251201_000002_create_customers;
mod m20251201_000003_create_appointments;
mod m20251214_230617_add_staff_comments_to_appointments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251201_000001_create_employees::Migration),
            Box::new(m20251201_000002_create_customers::Migration),
            Box::new(m20251201_000003_create_appointments::Migration),
            Box::new(m20251214_230617_add_staff_comments_to_appointments::Migration),
        ]
    }
}
