use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // WorkspaceMember: index on user_id for membership resolution
        manager
            .create_index(
                Index::create()
                    .name("idx_member_user")
                    .table(WorkspaceMember::Table)
                    .col(WorkspaceMember::UserId)
                    .to_owned(),
            )
            .await?;

        // WorkspaceMember: composite unique (user_id, workspace_id)
        manager
            .create_index(
                Index::create()
                    .name("uniq_member_user_workspace")
                    .table(WorkspaceMember::Table)
                    .col(WorkspaceMember::UserId)
                    .col(WorkspaceMember::WorkspaceId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Campaign: index on workspace_id and on deleted_at (default reads filter on it)
        manager
            .create_index(
                Index::create()
                    .name("idx_campaign_workspace")
                    .table(Campaign::Table)
                    .col(Campaign::WorkspaceId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_campaign_deleted_at")
                    .table(Campaign::Table)
                    .col(Campaign::DeletedAt)
                    .to_owned(),
            )
            .await?;

        // AdCreative: index on campaign_id
        manager
            .create_index(
                Index::create()
                    .name("idx_creative_campaign")
                    .table(AdCreative::Table)
                    .col(AdCreative::CampaignId)
                    .to_owned(),
            )
            .await?;

        // Integration: composite unique (workspace_id, provider, external_id)
        manager
            .create_index(
                Index::create()
                    .name("uniq_integration_workspace_provider_external")
                    .table(Integration::Table)
                    .col(Integration::WorkspaceId)
                    .col(Integration::Provider)
                    .col(Integration::ExternalId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // AiLog: index on workspace_id for usage reports
        manager
            .create_index(
                Index::create()
                    .name("idx_ai_log_workspace")
                    .table(AiLog::Table)
                    .col(AiLog::WorkspaceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_member_user").table(WorkspaceMember::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uniq_member_user_workspace")
                    .table(WorkspaceMember::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_campaign_workspace").table(Campaign::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_campaign_deleted_at").table(Campaign::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_creative_campaign").table(AdCreative::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uniq_integration_workspace_provider_external")
                    .table(Integration::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_ai_log_workspace").table(AiLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WorkspaceMember { Table, UserId, WorkspaceId }

#[derive(DeriveIden)]
enum Campaign { Table, WorkspaceId, DeletedAt }

#[derive(DeriveIden)]
enum AdCreative { Table, CampaignId }

#[derive(DeriveIden)]
enum Integration { Table, WorkspaceId, Provider, ExternalId }

#[derive(DeriveIden)]
enum AiLog { Table, WorkspaceId }
