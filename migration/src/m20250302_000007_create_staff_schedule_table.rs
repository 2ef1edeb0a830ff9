use sea_orm_migration::{prelude::*, schema::*};

use super::m20250302_000006_create_staff_table::Staff;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StaffSchedule::Table)
                    .if_not_exists()
                    .col(pk_auto(StaffSchedule::ScheduleId))
                    .col(integer(StaffSchedule::StaffId))
                    .col(string(StaffSchedule::ShiftDate))
                    .col(string(StaffSchedule::ShiftTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_staff_schedule_staff_id")
                            .from(StaffSchedule::Table, StaffSchedule::StaffId)
                            .to(Staff::Table, Staff::StaffId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StaffSchedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StaffSchedule {
    Table,
    ScheduleId,
    StaffId,
    ShiftDate,
    ShiftTime,
}
