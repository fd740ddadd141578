use std::fmt;

use crate::domain::{Customer, Employee};

/// Job title shown for every customer profile
pub const CUSTOMER_JOB_TITLE: &str = "Valued Customer";

/// Location shown for every customer profile
pub const CUSTOMER_LOCATION: &str = "Online";

/// Which account table a profile belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserType {
    Employee,
    Customer,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Customer => "Customer",
        }
    }

    /// Exact match on `"Employee"` / `"Customer"`; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Employee" => Some(Self::Employee),
            "Customer" => Some(Self::Customer),
            _ => None,
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile view-model. Built fresh per lookup and never stored.
///
/// `user_type` stays a plain string so that whatever a caller sends reaches
/// the updater, which rejects unknown values itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub job_title: String,
    pub location: String,
    pub user_type: String,
}

impl User {
    pub fn kind(&self) -> Option<UserType> {
        UserType::parse(&self.user_type)
    }
}

impl From<Employee> for User {
    fn from(e: Employee) -> Self {
        let location = e.location();
        Self {
            id: e.employee_id,
            first_name: e.first_name,
            last_name: e.last_name,
            username: e.username,
            email: e.email,
            phone: e.phone_number,
            job_title: e.job_title,
            location,
            user_type: UserType::Employee.as_str().to_string(),
        }
    }
}

impl From<Customer> for User {
    fn from(c: Customer) -> Self {
        Self {
            id: c.customer_id,
            first_name: c.first_name,
            last_name: c.last_name,
            username: c.username,
            email: c.email,
            phone: c.phone_number,
            job_title: CUSTOMER_JOB_TITLE.to_string(),
            location: CUSTOMER_LOCATION.to_string(),
            user_type: UserType::Customer.as_str().to_string(),
        }
    }
}

/// Split a `"City, State"` location into trimmed `(city, state)`.
///
/// Returns `None` when the input is blank or has no comma. Only the first two
/// comma-separated parts are used; anything after a second comma is dropped.
pub fn split_location(location: &str) -> Option<(String, String)> {
    if location.trim().is_empty() || !location.contains(',') {
        return None;
    }
    let mut parts = location.split(',');
    let city = parts.next()?.trim().to_string();
    let state = parts.next()?.trim().to_string();
    Some((city, state))
}
