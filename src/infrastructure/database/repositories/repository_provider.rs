//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{
    AppointmentRepository, CustomerRepository, EmployeeRepository, RepositoryProvider,
};

use super::appointment_repository::SeaOrmAppointmentRepository;
use super::customer_repository::SeaOrmCustomerRepository;
use super::employee_repository::SeaOrmEmployeeRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool; each repository call checks a connection out of
/// it for the duration of the query.
pub struct SeaOrmRepositoryProvider {
    employees: SeaOrmEmployeeRepository,
    customers: SeaOrmCustomerRepository,
    appointments: SeaOrmAppointmentRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            employees: SeaOrmEmployeeRepository::new(db.clone()),
            customers: SeaOrmCustomerRepository::new(db.clone()),
            appointments: SeaOrmAppointmentRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn employees(&self) -> &dyn EmployeeRepository {
        &self.employees
    }

    fn customers(&self) -> &dyn CustomerRepository {
        &self.customers
    }

    fn appointments(&self) -> &dyn AppointmentRepository {
        &self.appointments
    }
}
