//! Customer repository interface

use async_trait::async_trait;

use super::model::Customer;
use crate::domain::DomainResult;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find customer by primary key
    async fn find_by_id(&self, customer_id: i32) -> DomainResult<Option<Customer>>;

    /// Find the first customer whose email or username equals `key` exactly
    async fn find_by_email_or_username(&self, key: &str) -> DomainResult<Option<Customer>>;

    /// Persist names and phone number. Returns `false` if no row has this id.
    async fn save_profile(&self, customer: &Customer) -> DomainResult<bool>;
}
