pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_siglad_user_table;
mod m20260810_000002_create_importer_table;
mod m20260810_000003_create_exporter_table;
mod m20260810_000004_create_declaration_table;
mod m20260810_000005_create_declaration_item_table;
mod m20260810_000006_create_audit_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_siglad_user_table::Migration),
            Box::new(m20260810_000002_create_importer_table::Migration),
            Box::new(m20260810_000003_create_exporter_table::Migration),
            Box::new(m20260810_000004_create_declaration_table::Migration),
            Box::new(m20260810_000005_create_declaration_item_table::Migration),
            Box::new(m20260810_000006_create_audit_log_table::Migration),
        ]
    }
}
