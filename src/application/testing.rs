//! In-memory repositories for service tests
//!
//! Every successful `save_profile` / `set_staff_comments` bumps a write
//! counter so tests can assert that a code path did not touch storage.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use dashmap::DashMap;

use crate::domain::{
    Appointment, AppointmentRepository, AppointmentStatus, Customer, CustomerRepository,
    DomainResult, Employee, EmployeeRepository, RepositoryProvider,
};

#[derive(Default)]
pub struct InMemoryRepositories {
    pub employees: InMemoryEmployees,
    pub customers: InMemoryCustomers,
    pub appointments: InMemoryAppointments,
}

impl InMemoryRepositories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> usize {
        self.employees.writes.load(Ordering::SeqCst)
            + self.customers.writes.load(Ordering::SeqCst)
            + self.appointments.writes.load(Ordering::SeqCst)
    }

    pub fn employee(&self, id: i32) -> Option<Employee> {
        self.employees.rows.get(&id).map(|r| r.clone())
    }

    pub fn customer(&self, id: i32) -> Option<Customer> {
        self.customers.rows.get(&id).map(|r| r.clone())
    }
}

impl RepositoryProvider for InMemoryRepositories {
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

#[derive(Default)]
pub struct InMemoryEmployees {
    rows: DashMap<i32, Employee>,
    writes: AtomicUsize,
}

impl InMemoryEmployees {
    pub fn insert(&self, employee: Employee) {
        self.rows.insert(employee.employee_id, employee);
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployees {
    async fn find_by_id(&self, employee_id: i32) -> DomainResult<Option<Employee>> {
        Ok(self.rows.get(&employee_id).map(|r| r.clone()))
    }

    async fn find_by_email_or_username(&self, key: &str) -> DomainResult<Option<Employee>> {
        let mut matches: Vec<Employee> = self
            .rows
            .iter()
            .filter(|r| r.matches_key(key))
            .map(|r| r.clone())
            .collect();
        matches.sort_by_key(|e| e.employee_id);
        Ok(matches.into_iter().next())
    }

    async fn save_profile(&self, employee: &Employee) -> DomainResult<bool> {
        let Some(mut row) = self.rows.get_mut(&employee.employee_id) else {
            return Ok(false);
        };
        row.first_name = employee.first_name.clone();
        row.last_name = employee.last_name.clone();
        row.phone_number = employee.phone_number.clone();
        row.city = employee.city.clone();
        row.state = employee.state.clone();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }
}

#[derive(Default)]
pub struct InMemoryCustomers {
    rows: DashMap<i32, Customer>,
    writes: AtomicUsize,
}

impl InMemoryCustomers {
    pub fn insert(&self, customer: Customer) {
        self.rows.insert(customer.customer_id, customer);
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomers {
    async fn find_by_id(&self, customer_id: i32) -> DomainResult<Option<Customer>> {
        Ok(self.rows.get(&customer_id).map(|r| r.clone()))
    }

    async fn find_by_email_or_username(&self, key: &str) -> DomainResult<Option<Customer>> {
        let mut matches: Vec<Customer> = self
            .rows
            .iter()
            .filter(|r| r.matches_key(key))
            .map(|r| r.clone())
            .collect();
        matches.sort_by_key(|c| c.customer_id);
        Ok(matches.into_iter().next())
    }

    async fn save_profile(&self, customer: &Customer) -> DomainResult<bool> {
        let Some(mut row) = self.rows.get_mut(&customer.customer_id) else {
            return Ok(false);
        };
        row.first_name = customer.first_name.clone();
        row.last_name = customer.last_name.clone();
        row.phone_number = customer.phone_number.clone();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }
}

#[derive(Default)]
pub struct InMemoryAppointments {
    rows: DashMap<i32, Appointment>,
    writes: AtomicUsize,
}

impl InMemoryAppointments {
    pub fn insert(&self, appointment: Appointment) {
        self.rows.insert(appointment.appointment_id, appointment);
    }

    fn sorted(&self, pred: impl Fn(&Appointment) -> bool) -> Vec<Appointment> {
        let mut rows: Vec<Appointment> = self
            .rows
            .iter()
            .filter(|r| pred(r.value()))
            .map(|r| r.clone())
            .collect();
        rows.sort_by_key(|a| a.scheduled_at);
        rows
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointments {
    async fn find_by_id(&self, appointment_id: i32) -> DomainResult<Option<Appointment>> {
        Ok(self.rows.get(&appointment_id).map(|r| r.clone()))
    }

    async fn list_for_employee(&self, employee_id: i32) -> DomainResult<Vec<Appointment>> {
        Ok(self.sorted(|a| a.is_assigned_to(employee_id)))
    }

    async fn list_for_customer(&self, customer_id: i32) -> DomainResult<Vec<Appointment>> {
        Ok(self.sorted(|a| a.is_for_customer(customer_id)))
    }

    async fn set_staff_comments(
        &self,
        appointment_id: i32,
        comments: Option<String>,
    ) -> DomainResult<Option<Appointment>> {
        let Some(mut row) = self.rows.get_mut(&appointment_id) else {
            return Ok(None);
        };
        row.staff_comments = comments;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(Some(row.clone()))
    }
}

// ── Fixtures ────────────────────────────────────────────────────

pub fn employee(id: i32, username: &str, email: &str) -> Employee {
    Employee {
        employee_id: id,
        first_name: "Ana".into(),
        last_name: "Lopez".into(),
        username: username.into(),
        email: email.into(),
        phone_number: "555-0100".into(),
        job_title: "Massage Therapist".into(),
        city: "Austin".into(),
        state: "TX".into(),
        password_hash: String::new(),
    }
}

pub fn customer(id: i32, username: &str, email: &str) -> Customer {
    Customer {
        customer_id: id,
        first_name: "Bea".into(),
        last_name: "Kim".into(),
        username: username.into(),
        email: email.into(),
        phone_number: "555-0199".into(),
        password_hash: String::new(),
    }
}

pub fn appointment(id: i32, customer_id: i32, employee_id: i32, day: u32) -> Appointment {
    let at = Utc
        .with_ymd_and_hms(2025, 12, day, 10, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);
    Appointment {
        appointment_id: id,
        customer_id,
        employee_id,
        service_name: "Hot Stone Massage".into(),
        scheduled_at: at,
        status: AppointmentStatus::Scheduled,
        notes: None,
        staff_comments: None,
        created_at: at,
    }
}
