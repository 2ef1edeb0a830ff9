use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::Users, m20250301_000002_create_room_table::Rooms,
    m20250301_000003_create_guest_table::Guests,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservations::ReservationId))
                    .col(integer(Reservations::GuestId))
                    .col(integer(Reservations::RoomId))
                    .col(string(Reservations::CheckInDate))
                    .col(string(Reservations::CheckOutDate))
                    .col(string(Reservations::Status))
                    .col(double(Reservations::TotalPrice))
                    .col(
                        timestamp_with_time_zone(Reservations::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(Reservations::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_guest_id")
                            .from(Reservations::Table, Reservations::GuestId)
                            .to(Guests::Table, Guests::GuestId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_room_id")
                            .from(Reservations::Table, Reservations::RoomId)
                            .to(Rooms::Table, Rooms::RoomId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_user_id")
                            .from(Reservations::Table, Reservations::UserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservations {
    Table,
    ReservationId,
    GuestId,
    RoomId,
    CheckInDate,
    CheckOutDate,
    Status,
    TotalPrice,
    CreatedAt,
    UserId,
}
