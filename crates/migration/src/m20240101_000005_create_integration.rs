//! Create `integration` table with FK to `workspace`.
//!
//! Stores per-workspace ad-platform credentials; the access token arrives
//! already encrypted. At most one row per (workspace, provider, external id),
//! enforced by a unique index in the index migration.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Integration::Table)
                    .if_not_exists()
                    .col(uuid(Integration::Id).primary_key())
                    .col(uuid(Integration::WorkspaceId).not_null())
                    .col(string_len(Integration::Provider, 32).not_null())
                    .col(string_len(Integration::ExternalId, 128).not_null())
                    .col(ColumnDef::new(Integration::AccessToken).text().not_null())
                    .col(
                        ColumnDef::new(Integration::ExpiresAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(timestamp_with_time_zone(Integration::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Integration::UpdatedAt).not_null())
                    .col(
                        ColumnDef::new(Integration::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_integration_workspace")
                            .from(Integration::Table, Integration::WorkspaceId)
                            .to(Workspace::Table, Workspace::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Integration::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Integration {
    Table,
    Id,
    WorkspaceId,
    Provider,
    ExternalId,
    AccessToken,
    ExpiresAt,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
enum Workspace { Table, Id }
