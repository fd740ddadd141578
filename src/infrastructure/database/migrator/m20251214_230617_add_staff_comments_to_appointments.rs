//! Migration: add nullable staff_comments (max 500 chars) to appointments

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Appointments::Table)
                    .add_column(
                        ColumnDef::new(Appointments::StaffComments)
                            .string_len(500)
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Appointments::Table)
                    .drop_column(Appointments::StaffComments)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Appointments {
    Table,
    StaffComments,
}
