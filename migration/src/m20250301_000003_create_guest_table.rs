use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guests::Table)
                    .if_not_exists()
                    .col(pk_auto(Guests::GuestId))
                    .col(string(Guests::FirstName))
                    .col(string(Guests::LastName))
                    .col(string(Guests::Email))
                    .col(string(Guests::Phone))
                    .col(integer(Guests::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guests_user_id")
                            .from(Guests::Table, Guests::UserId)
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
            .drop_table(Table::drop().table(Guests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guests {
    Table,
    GuestId,
    FirstName,
    LastName,
    Email,
    Phone,
    UserId,
}
