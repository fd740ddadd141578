//! SeaORM implementation of EmployeeRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::domain::{DomainResult, Employee, EmployeeRepository};
use crate::infrastructure::database::entities::employee;

pub struct SeaOrmEmployeeRepository {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(model: employee::Model) -> Employee {
    Employee {
        employee_id: model.employee_id,
        first_name: model.first_name,
        last_name: model.last_name,
        username: model.username,
        email: model.email,
        phone_number: model.phone_number,
        job_title: model.job_title,
        city: model.city,
        state: model.state,
        password_hash: model.password_hash,
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn find_by_id(&self, employee_id: i32) -> DomainResult<Option<Employee>> {
        let model = employee::Entity::find_by_id(employee_id).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_email_or_username(&self, key: &str) -> DomainResult<Option<Employee>> {
        let model = employee::Entity::find()
            .filter(
                employee::Column::Email
                    .eq(key)
                    .or(employee::Column::Username.eq(key)),
            )
            .one(&self.db)
            .await?;

        Ok(model.map(model_to_domain))
    }

    async fn save_profile(&self, emp: &Employee) -> DomainResult<bool> {
        let Some(existing) = employee::Entity::find_by_id(emp.employee_id)
            .one(&self.db)
            .await?
        else {
            debug!("Employee {} not found for update", emp.employee_id);
            return Ok(false);
        };

        let mut active: employee::ActiveModel = existing.into();
        active.first_name = Set(emp.first_name.clone());
        active.last_name = Set(emp.last_name.clone());
        active.phone_number = Set(emp.phone_number.clone());
        active.city = Set(emp.city.clone());
        active.state = Set(emp.state.clone());
        active.update(&self.db).await?;

        Ok(true)
    }
}
