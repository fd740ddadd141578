//! SeaORM implementation of AppointmentRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{Appointment, AppointmentRepository, AppointmentStatus, DomainResult};
use crate::infrastructure::database::entities::appointment;

pub struct SeaOrmAppointmentRepository {
    db: DatabaseConnection,
}

impl SeaOrmAppointmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn status_to_domain(status: appointment::AppointmentStatus) -> AppointmentStatus {
    match status {
        appointment::AppointmentStatus::Scheduled => AppointmentStatus::Scheduled,
        appointment::AppointmentStatus::Completed => AppointmentStatus::Completed,
        appointment::AppointmentStatus::Cancelled => AppointmentStatus::Cancelled,
    }
}

fn model_to_domain(model: appointment::Model) -> Appointment {
    Appointment {
        appointment_id: model.appointment_id,
        customer_id: model.customer_id,
        employee_id: model.employee_id,
        service_name: model.service_name,
        scheduled_at: model.scheduled_at,
        status: status_to_domain(model.status),
        notes: model.notes,
        staff_comments: model.staff_comments,
        created_at: model.created_at,
    }
}

#[async_trait]
impl AppointmentRepository for SeaOrmAppointmentRepository {
    async fn find_by_id(&self, appointment_id: i32) -> DomainResult<Option<Appointment>> {
        let model = appointment::Entity::find_by_id(appointment_id)
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_domain))
    }

    async fn list_for_employee(&self, employee_id: i32) -> DomainResult<Vec<Appointment>> {
        let models = appointment::Entity::find()
            .filter(appointment::Column::EmployeeId.eq(employee_id))
            .order_by_asc(appointment::Column::ScheduledAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn list_for_customer(&self, customer_id: i32) -> DomainResult<Vec<Appointment>> {
        let models = appointment::Entity::find()
            .filter(appointment::Column::CustomerId.eq(customer_id))
            .order_by_asc(appointment::Column::ScheduledAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn set_staff_comments(
        &self,
        appointment_id: i32,
        comments: Option<String>,
    ) -> DomainResult<Option<Appointment>> {
        let Some(existing) = appointment::Entity::find_by_id(appointment_id)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: appointment::ActiveModel = existing.into();
        active.staff_comments = Set(comments);
        let updated = active.update(&self.db).await?;

        Ok(Some(model_to_domain(updated)))
    }
}
