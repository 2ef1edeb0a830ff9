use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000004_create_reservation_table::Reservations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(pk_auto(Payments::PaymentId))
                    .col(integer(Payments::ReservationId))
                    .col(string(Payments::PaymentMethod))
                    .col(string(Payments::PaymentStatus))
                    .col(double(Payments::Amount))
                    .col(
                        timestamp_with_time_zone(Payments::TransactionDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_reservation_id")
                            .from(Payments::Table, Payments::ReservationId)
                            .to(Reservations::Table, Reservations::ReservationId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payments {
    Table,
    PaymentId,
    ReservationId,
    PaymentMethod,
    PaymentStatus,
    Amount,
    TransactionDate,
}
