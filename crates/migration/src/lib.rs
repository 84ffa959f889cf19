pub use sea_orm_migration::prelude::*;

mod m20250830_create_reservations_table;
mod m20250830_add_reservation_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250830_create_reservations_table::Migration),
            Box::new(m20250830_add_reservation_indexes::Migration),
        ]
    }
}
