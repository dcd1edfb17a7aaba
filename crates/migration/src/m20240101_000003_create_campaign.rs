//! Create `campaign` table with FK to `workspace`.
//!
//! Includes the nullable soft-delete timestamp.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Campaign::Table)
                    .if_not_exists()
                    .col(uuid(Campaign::Id).primary_key())
                    .col(uuid(Campaign::WorkspaceId).not_null())
                    .col(string_len(Campaign::Name, 200).not_null())
                    .col(string_len(Campaign::Objective, 128).not_null())
                    .col(string_len(Campaign::Platform, 64).not_null())
                    .col(string_len(Campaign::Status, 32).not_null())
                    .col(ColumnDef::new(Campaign::Description).text().null())
                    .col(uuid(Campaign::CreatedBy).not_null())
                    .col(timestamp_with_time_zone(Campaign::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Campaign::UpdatedAt).not_null())
                    // Explicitly define nullable deleted_at to avoid conflicting NULL/NOT NULL
                    .col(
                        ColumnDef::new(Campaign::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_workspace")
                            .from(Campaign::Table, Campaign::WorkspaceId)
                            .to(Workspace::Table, Workspace::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Campaign::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Campaign {
    Table,
    Id,
    WorkspaceId,
    Name,
    Objective,
    Platform,
    Status,
    Description,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
enum Workspace { Table, Id }
