pub use sea_orm_migration::prelude::*;

mod m20260107_000001_create_user_table;
mod m20260107_000002_create_notification_table;
mod m20260107_000003_create_connection_id_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260107_000001_create_user_table::Migration),
            Box::new(m20260107_000002_create_notification_table::Migration),
            Box::new(m20260107_000003_create_connection_id_table::Migration),
        ]
    }
}
