//! SeaORM implementation of CustomerRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::domain::{Customer, CustomerRepository, DomainResult};
use crate::infrastructure::database::entities::customer;

pub struct SeaOrmCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(model: customer::Model) -> Customer {
    Customer {
        customer_id: model.customer_id,
        first_name: model.first_name,
        last_name: model.last_name,
        username: model.username,
        email: model.email,
        phone_number: model.phone_number,
        password_hash: model.password_hash,
    }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn find_by_id(&self, customer_id: i32) -> DomainResult<Option<Customer>> {
        let model = customer::Entity::find_by_id(customer_id).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_email_or_username(&self, key: &str) -> DomainResult<Option<Customer>> {
        let model = customer::Entity::find()
            .filter(
                customer::Column::Email
                    .eq(key)
                    .or(customer::Column::Username.eq(key)),
            )
            .one(&self.db)
            .await?;

        Ok(model.map(model_to_domain))
    }

    async fn save_profile(&self, c: &Customer) -> DomainResult<bool> {
        let Some(existing) = customer::Entity::find_by_id(c.customer_id)
            .one(&self.db)
            .await?
        else {
            debug!("Customer {} not found for update", c.customer_id);
            return Ok(false);
        };

        let mut active: customer::ActiveModel = existing.into();
        active.first_name = Set(c.first_name.clone());
        active.last_name = Set(c.last_name.clone());
        active.phone_number = Set(c.phone_number.clone());
        active.update(&self.db).await?;

        Ok(true)
    }
}
