//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_workspace;
mod m20240101_000002_create_workspace_member;
mod m20240101_000003_create_campaign;
mod m20240101_000004_create_ad_creative;
mod m20240101_000005_create_integration;
mod m20240101_000006_create_ai_log;
mod m20240101_000007_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_workspace::Migration),
            Box::new(m20240101_000002_create_workspace_member::Migration),
            Box::new(m20240101_000003_create_campaign::Migration),
            Box::new(m20240101_000004_create_ad_creative::Migration),
            Box::new(m20240101_000005_create_integration::Migration),
            Box::new(m20240101_000006_create_ai_log::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000007_add_indexes::Migration),
        ]
    }
}
