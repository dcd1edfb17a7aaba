//! Create `workspace_member` join table.
//!
//! Maps external user ids to workspaces; users have no table of their own here.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkspaceMember::Table)
                    .if_not_exists()
                    .col(uuid(WorkspaceMember::Id).primary_key())
                    .col(uuid(WorkspaceMember::UserId).not_null())
                    .col(uuid(WorkspaceMember::WorkspaceId).not_null())
                    .col(timestamp_with_time_zone(WorkspaceMember::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_workspace")
                            .from(WorkspaceMember::Table, WorkspaceMember::WorkspaceId)
                            .to(Workspace::Table, Workspace::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(WorkspaceMember::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum WorkspaceMember { Table, Id, UserId, WorkspaceId, CreatedAt }

#[derive(DeriveIden)]
enum Workspace { Table, Id }
