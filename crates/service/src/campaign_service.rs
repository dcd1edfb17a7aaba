//! Campaign lifecycle: created in DRAFT, edited by patch, archived via the
//! store's delete rewrite. Authorization always precedes mutation.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{ColumnTrait, Condition, Set};
use uuid::Uuid;

use models::{ad_creative, campaign};
use store::{Query, Store};

use crate::access;
use crate::errors::ServiceError;
use crate::principal::Principal;

#[derive(Debug, Clone)]
pub struct CreateCampaign {
    pub name: String,
    pub objective: String,
    pub platform: String,
    pub description: Option<String>,
}

/// Partial update; absent fields stay untouched. The owning workspace and the
/// creator are deliberately not expressible here.
#[derive(Debug, Clone, Default)]
pub struct UpdateCampaign {
    pub name: Option<String>,
    pub objective: Option<String>,
    pub platform: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CampaignSummary {
    pub campaign: campaign::Model,
    pub creative_count: u64,
}

#[derive(Debug, Clone)]
pub struct CampaignDetail {
    pub campaign: campaign::Model,
    pub creatives: Vec<ad_creative::Model>,
}

/// Create a campaign in DRAFT, bound to the principal's first workspace.
/// The caller cannot choose the workspace; it is resolved server-side.
pub async fn create_campaign(
    store: &Store,
    principal: &Principal,
    input: CreateCampaign,
) -> Result<campaign::Model, ServiceError> {
    let workspace_id = access::require_workspace(store, principal).await?;
    campaign::validate_name(&input.name)?;
    let now = Utc::now().into();
    let created = store
        .create::<campaign::Entity>(campaign::ActiveModel {
            id: Set(Uuid::new_v4()),
            workspace_id: Set(workspace_id),
            name: Set(input.name),
            objective: Set(input.objective),
            platform: Set(input.platform),
            status: Set(campaign::STATUS_DRAFT.to_string()),
            description: Set(input.description),
            created_by: Set(principal.subject),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        })
        .await?;
    tracing::info!(campaign_id = %created.id, workspace_id = %workspace_id, "campaign created");
    Ok(created)
}

/// All live campaigns across the principal's workspaces, newest first, each
/// annotated with its live creative count. The descending creation order is
/// part of the contract.
pub async fn list_campaigns(
    store: &Store,
    principal: &Principal,
) -> Result<Vec<CampaignSummary>, ServiceError> {
    let workspace_ids = access::accessible_workspaces(store, principal).await?;
    if workspace_ids.is_empty() {
        return Err(ServiceError::Forbidden("principal has no workspace".into()));
    }
    let campaigns = store
        .find_many::<campaign::Entity>(
            Query::new()
                .filter(access::workspace_scope(campaign::Column::WorkspaceId, &workspace_ids))
                .order_by_desc(campaign::Column::CreatedAt),
        )
        .await?;
    let ids: Vec<Uuid> = campaigns.iter().map(|c| c.id).collect();
    let counts: HashMap<Uuid, u64> = store
        .count_grouped::<ad_creative::Entity, Uuid>(
            Query::new().filter(ad_creative::Column::CampaignId.is_in(ids)),
            ad_creative::Column::CampaignId,
        )
        .await?
        .into_iter()
        .collect();
    Ok(campaigns
        .into_iter()
        .map(|c| {
            let creative_count = counts.get(&c.id).copied().unwrap_or(0);
            CampaignSummary { campaign: c, creative_count }
        })
        .collect())
}

/// Authorized single lookup including live child creatives.
pub async fn get_campaign(
    store: &Store,
    principal: &Principal,
    id: Uuid,
) -> Result<CampaignDetail, ServiceError> {
    let campaign = access::authorize_campaign(store, principal, id).await?;
    let creatives = store
        .find_many::<ad_creative::Entity>(
            Query::new().filter(ad_creative::Column::CampaignId.eq(campaign.id)),
        )
        .await?;
    Ok(CampaignDetail { campaign, creatives })
}

/// Merge the present patch fields onto the campaign. Workspace and creator
/// are immutable by construction; `updated_at` is bumped on every patch.
pub async fn update_campaign(
    store: &Store,
    principal: &Principal,
    id: Uuid,
    patch: UpdateCampaign,
) -> Result<campaign::Model, ServiceError> {
    let current = access::authorize_campaign(store, principal, id).await?;
    let mut active: campaign::ActiveModel = current.into();
    if let Some(name) = patch.name {
        campaign::validate_name(&name)?;
        active.name = Set(name);
    }
    if let Some(objective) = patch.objective {
        active.objective = Set(objective);
    }
    if let Some(platform) = patch.platform {
        active.platform = Set(platform);
    }
    if let Some(status) = patch.status {
        // Statuses beyond DRAFT are opaque product values; stored as-is.
        active.status = Set(status);
    }
    if let Some(description) = patch.description {
        active.description = Set(Some(description));
    }
    active.updated_at = Set(Utc::now().into());
    Ok(store.update::<campaign::Entity>(active).await?)
}

/// Archive is a delete-shaped call; the store rewrites it into a soft-delete.
/// Archiving an already-archived id fails with NotFound because the
/// authorization lookup reads through the default filter.
pub async fn archive_campaign(
    store: &Store,
    principal: &Principal,
    id: Uuid,
) -> Result<(), ServiceError> {
    let campaign = access::authorize_campaign(store, principal, id).await?;
    store
        .delete::<campaign::Entity>(Condition::all().add(campaign::Column::Id.eq(campaign.id)))
        .await?;
    tracing::info!(campaign_id = %campaign.id, "campaign archived");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use crate::workspace_service;
    use store::DeletedVisibility;

    async fn seed_principal(store: &Store) -> Result<(Principal, Uuid), anyhow::Error> {
        let principal = Principal::new(Uuid::new_v4());
        let ws = workspace_service::create_workspace(
            store,
            &format!("svc_ws_{}", Uuid::new_v4()),
            Some("confident, playful".into()),
            None,
        )
        .await?;
        workspace_service::add_member(store, ws.id, principal.subject).await?;
        Ok((principal, ws.id))
    }

    fn draft_input(name: &str) -> CreateCampaign {
        CreateCampaign {
            name: name.into(),
            objective: "CONVERSIONS".into(),
            platform: "META".into(),
            description: None,
        }
    }

    #[tokio::test]
    async fn campaign_lifecycle() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let store = Store::new(get_db().await?);
        let (principal, ws_id) = seed_principal(&store).await?;

        let created = create_campaign(&store, &principal, draft_input("Launch")).await?;
        assert_eq!(created.status, campaign::STATUS_DRAFT);
        assert_eq!(created.workspace_id, ws_id);
        assert_eq!(created.created_by, principal.subject);

        let detail = get_campaign(&store, &principal, created.id).await?;
        assert!(detail.creatives.is_empty());

        let updated = update_campaign(
            &store,
            &principal,
            created.id,
            UpdateCampaign { name: Some("Launch v2".into()), ..Default::default() },
        )
        .await?;
        assert_eq!(updated.name, "Launch v2");
        assert_eq!(updated.workspace_id, ws_id);

        archive_campaign(&store, &principal, created.id).await?;
        let after = get_campaign(&store, &principal, created.id).await;
        assert!(matches!(after, Err(ServiceError::NotFound(_))));

        // Row still physically present with the marker set.
        let archived = store
            .find_first::<campaign::Entity>(
                Query::new()
                    .filter(campaign::Column::Id.eq(created.id))
                    .visibility(DeletedVisibility::DeletedOnly),
            )
            .await?
            .expect("archived row remains");
        assert!(archived.deleted_at.is_some());

        // Second archive hits the authorization lookup and 404s.
        let again = archive_campaign(&store, &principal, created.id).await;
        assert!(matches!(again, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn listing_is_scoped_counted_and_newest_first() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let store = Store::new(get_db().await?);
        let (principal, _ws_id) = seed_principal(&store).await?;

        let first = create_campaign(&store, &principal, draft_input("First")).await?;
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        let second = create_campaign(&store, &principal, draft_input("Second")).await?;

        let now = Utc::now().into();
        store
            .create::<ad_creative::Entity>(ad_creative::ActiveModel {
                id: Set(Uuid::new_v4()),
                campaign_id: Set(second.id),
                headline: Set("Stop the scroll".into()),
                body: Set("Try it today.".into()),
                image_url: Set(None),
                created_at: Set(now),
                updated_at: Set(now),
                deleted_at: Set(None),
            })
            .await?;

        let listed = list_campaigns(&store, &principal).await?;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].campaign.id, second.id);
        assert_eq!(listed[0].creative_count, 1);
        assert_eq!(listed[1].campaign.id, first.id);
        assert_eq!(listed[1].creative_count, 0);
        assert!(listed[0].campaign.created_at >= listed[1].campaign.created_at);
        Ok(())
    }

    #[tokio::test]
    async fn cross_workspace_access_is_not_found() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let store = Store::new(get_db().await?);
        let (owner, _) = seed_principal(&store).await?;
        let (outsider, _) = seed_principal(&store).await?;

        let theirs = create_campaign(&store, &owner, draft_input("Private")).await?;

        let got = get_campaign(&store, &outsider, theirs.id).await;
        assert!(matches!(got, Err(ServiceError::NotFound(_))));

        let patched = update_campaign(
            &store,
            &outsider,
            theirs.id,
            UpdateCampaign { name: Some("hijacked".into()), ..Default::default() },
        )
        .await;
        assert!(matches!(patched, Err(ServiceError::NotFound(_))));

        let archived = archive_campaign(&store, &outsider, theirs.id).await;
        assert!(matches!(archived, Err(ServiceError::NotFound(_))));

        // Untouched for the owner.
        let still = get_campaign(&store, &owner, theirs.id).await?;
        assert_eq!(still.campaign.name, "Private");
        Ok(())
    }

    #[tokio::test]
    async fn create_without_membership_is_forbidden_and_writes_nothing() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let store = Store::new(get_db().await?);
        let stranger = Principal::new(Uuid::new_v4());

        let result = create_campaign(&store, &stranger, draft_input("Orphan")).await;
        assert!(matches!(result, Err(ServiceError::Forbidden(_))));

        let written = store
            .count::<campaign::Entity>(
                Query::new()
                    .filter(campaign::Column::CreatedBy.eq(stranger.subject))
                    .visibility(DeletedVisibility::Any),
            )
            .await?;
        assert_eq!(written, 0);

        let listed = list_campaigns(&store, &stranger).await;
        assert!(matches!(listed, Err(ServiceError::Forbidden(_))));
        Ok(())
    }
}
