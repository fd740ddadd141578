//! Migration to create appointments table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Appointments::AppointmentId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Appointments::CustomerId).integer().not_null())
                    .col(ColumnDef::new(Appointments::EmployeeId).integer().not_null())
                    .col(
                        ColumnDef::new(Appointments::ServiceName)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Appointments::ScheduledAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Appointments::Status)
                            .string_len(20)
                            .not_null()
                            .default("Scheduled"),
                    )
                    .col(ColumnDef::new(Appointments::Notes).string_len(1000).null())
                    .col(
                        ColumnDef::new(Appointments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointments_customer")
                            .from(Appointments::Table, Appointments::CustomerId)
                            .to(Customers::Table, Customers::CustomerId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointments_employee")
                            .from(Appointments::Table, Appointments::EmployeeId)
                            .to(Employees::Table, Employees::EmployeeId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointments_customer_id")
                    .table(Appointments::Table)
                    .col(Appointments::CustomerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointments_employee_id")
                    .table(Appointments::Table)
                    .col(Appointments::EmployeeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Appointments {
    Table,
    AppointmentId,
    CustomerId,
    EmployeeId,
    ServiceName,
    ScheduledAt,
    Status,
    Notes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    CustomerId,
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    EmployeeId,
}
