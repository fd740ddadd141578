//! Shared fixtures: a migrated in-memory SQLite database with a few rows.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;

use spa_booking::infrastructure::crypto::password::hash_password_with_cost;
use spa_booking::infrastructure::database::entities::{appointment, customer, employee};
use spa_booking::infrastructure::database::migrator::Migrator;
use spa_booking::{init_database, DatabaseConfig};

pub const PASSWORD: &str = "lavender-oil";

pub async fn migrated_db() -> DatabaseConnection {
    let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

fn password_hash() -> String {
    hash_password_with_cost(PASSWORD, 4).unwrap()
}

pub async fn insert_employee(db: &DatabaseConnection, username: &str, email: &str) -> i32 {
    employee::ActiveModel {
        first_name: Set("Ana".into()),
        last_name: Set("Lopez".into()),
        username: Set(username.into()),
        email: Set(email.into()),
        phone_number: Set("512-555-0101".into()),
        job_title: Set("Massage Therapist".into()),
        city: Set("Austin".into()),
        state: Set("TX".into()),
        password_hash: Set(password_hash()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .employee_id
}

pub async fn insert_customer(db: &DatabaseConnection, username: &str, email: &str) -> i32 {
    customer::ActiveModel {
        first_name: Set("Bea".into()),
        last_name: Set("Kim".into()),
        username: Set(username.into()),
        email: Set(email.into()),
        phone_number: Set("512-555-0199".into()),
        password_hash: Set(password_hash()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .customer_id
}

pub async fn insert_appointment(
    db: &DatabaseConnection,
    customer_id: i32,
    employee_id: i32,
    day: u32,
) -> i32 {
    let at = Utc.with_ymd_and_hms(2025, 12, day, 15, 0, 0).unwrap();
    appointment::ActiveModel {
        customer_id: Set(customer_id),
        employee_id: Set(employee_id),
        service_name: Set("Hot stone massage".into()),
        scheduled_at: Set(at),
        status: Set(appointment::AppointmentStatus::Scheduled),
        notes: Set(None),
        staff_comments: Set(None),
        created_at: Set(at),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .appointment_id
}
