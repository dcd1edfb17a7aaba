//! Create `ad_creative` table with FK to `campaign`.
//!
//! Creatives inherit workspace scope through their campaign; they carry their
//! own soft-delete timestamp.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdCreative::Table)
                    .if_not_exists()
                    .col(uuid(AdCreative::Id).primary_key())
                    .col(uuid(AdCreative::CampaignId).not_null())
                    .col(string_len(AdCreative::Headline, 300).not_null())
                    .col(ColumnDef::new(AdCreative::Body).text().not_null())
                    .col(ColumnDef::new(AdCreative::ImageUrl).text().null())
                    .col(timestamp_with_time_zone(AdCreative::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(AdCreative::UpdatedAt).not_null())
                    .col(
                        ColumnDef::new(AdCreative::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_creative_campaign")
                            .from(AdCreative::Table, AdCreative::CampaignId)
                            .to(Campaign::Table, Campaign::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AdCreative::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AdCreative { Table, Id, CampaignId, Headline, Body, ImageUrl, CreatedAt, UpdatedAt, DeletedAt }

#[derive(DeriveIden)]
enum Campaign { Table, Id }
