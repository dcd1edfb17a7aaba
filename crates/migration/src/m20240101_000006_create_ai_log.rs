//! Create `ai_log` table.
//!
//! Append-only token-usage ledger. Deliberately has no `deleted_at` column:
//! ledger rows are exempt from soft-delete.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AiLog::Table)
                    .if_not_exists()
                    .col(big_integer(AiLog::Id).auto_increment().primary_key())
                    .col(uuid(AiLog::UserId).not_null())
                    .col(uuid(AiLog::WorkspaceId).not_null())
                    .col(string_len(AiLog::Provider, 32).not_null())
                    .col(string_len(AiLog::Model, 64).not_null())
                    .col(string_len(AiLog::Kind, 32).not_null())
                    .col(integer(AiLog::InputTokens).not_null())
                    .col(integer(AiLog::OutputTokens).not_null())
                    .col(integer(AiLog::TotalTokens).not_null())
                    .col(timestamp_with_time_zone(AiLog::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ai_log_workspace")
                            .from(AiLog::Table, AiLog::WorkspaceId)
                            .to(Workspace::Table, Workspace::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AiLog::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AiLog {
    Table,
    Id,
    UserId,
    WorkspaceId,
    Provider,
    Model,
    Kind,
    InputTokens,
    OutputTokens,
    TotalTokens,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Workspace { Table, Id }
