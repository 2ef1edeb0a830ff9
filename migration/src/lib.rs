pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_room_table;
mod m20250301_000003_create_guest_table;
mod m20250301_000004_create_reservation_table;
mod m20250301_000005_create_payment_table;
mod m20250302_000006_create_staff_table;
mod m20250302_000007_create_staff_schedule_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_room_table::Migration),
            Box::new(m20250301_000003_create_guest_table::Migration),
            Box::new(m20250301_000004_create_reservation_table::Migration),
            Box::new(m20250301_000005_create_payment_table::Migration),
            Box::new(m20250302_000006_create_staff_table::Migration),
            Box::new(m20250302_000007_create_staff_schedule_table::Migration),
        ]
    }
}
