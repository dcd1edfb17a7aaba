//! Ad-platform integrations: one credential row per
//! (workspace, provider, external id). The token arrives already encrypted
//! from the upstream security collaborator; the OAuth exchange itself lives
//! outside this core.

use chrono::Utc;
use sea_orm::{ColumnTrait, Set};
use sea_orm::prelude::DateTimeWithTimeZone;
use uuid::Uuid;

use models::integration;
use store::{DeletedVisibility, Query, Store};

use crate::access;
use crate::errors::ServiceError;
use crate::principal::Principal;

#[derive(Debug, Clone)]
pub struct UpsertIntegration {
    pub provider: String,
    pub external_id: String,
    /// Ciphertext; never the plaintext token.
    pub access_token: String,
    pub expires_at: Option<DateTimeWithTimeZone>,
}

/// Create or refresh the credential for the principal's workspace. The
/// lookup deliberately spans archived rows: the unique
/// (workspace, provider, external_id) tuple still holds the soft-deleted row,
/// so reconnecting revives it instead of colliding with the constraint.
pub async fn upsert_integration(
    store: &Store,
    principal: &Principal,
    input: UpsertIntegration,
) -> Result<integration::Model, ServiceError> {
    let workspace_id = access::require_workspace(store, principal).await?;
    integration::validate_provider(&input.provider)?;

    let existing = store
        .find_first::<integration::Entity>(
            Query::new()
                .filter(access::workspace_scope(
                    integration::Column::WorkspaceId,
                    &[workspace_id],
                ))
                .filter(integration::Column::Provider.eq(input.provider.clone()))
                .filter(integration::Column::ExternalId.eq(input.external_id.clone()))
                .visibility(DeletedVisibility::Any),
        )
        .await?;

    let now = Utc::now().into();
    match existing {
        Some(row) => {
            let mut active: integration::ActiveModel = row.into();
            active.access_token = Set(input.access_token);
            active.expires_at = Set(input.expires_at);
            active.updated_at = Set(now);
            active.deleted_at = Set(None);
            Ok(store.update::<integration::Entity>(active).await?)
        }
        None => {
            let created = store
                .create::<integration::Entity>(integration::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    workspace_id: Set(workspace_id),
                    provider: Set(input.provider),
                    external_id: Set(input.external_id),
                    access_token: Set(input.access_token),
                    expires_at: Set(input.expires_at),
                    created_at: Set(now),
                    updated_at: Set(now),
                    deleted_at: Set(None),
                })
                .await?;
            tracing::info!(
                integration_id = %created.id,
                workspace_id = %workspace_id,
                provider = %created.provider,
                "integration connected"
            );
            Ok(created)
        }
    }
}

/// Fetch the live credential for the principal's workspace; NotFound covers
/// both absence and archival.
pub async fn get_integration(
    store: &Store,
    principal: &Principal,
    provider: &str,
    external_id: &str,
) -> Result<integration::Model, ServiceError> {
    let workspace_id = access::require_workspace(store, principal).await?;
    store
        .find_first::<integration::Entity>(
            Query::new()
                .filter(access::workspace_scope(
                    integration::Column::WorkspaceId,
                    &[workspace_id],
                ))
                .filter(integration::Column::Provider.eq(provider))
                .filter(integration::Column::ExternalId.eq(external_id)),
        )
        .await?
        .ok_or_else(|| ServiceError::not_found("integration"))
}

/// Disconnect: delete-shaped call, soft-deleted by the store.
pub async fn disconnect_integration(
    store: &Store,
    principal: &Principal,
    provider: &str,
    external_id: &str,
) -> Result<(), ServiceError> {
    let current = get_integration(store, principal, provider, external_id).await?;
    store
        .delete::<integration::Entity>(
            sea_orm::Condition::all().add(integration::Column::Id.eq(current.id)),
        )
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use crate::workspace_service;

    async fn seed_principal(store: &Store) -> Result<Principal, anyhow::Error> {
        let principal = Principal::new(Uuid::new_v4());
        let ws = workspace_service::create_workspace(
            store,
            &format!("intg_ws_{}", Uuid::new_v4()),
            None,
            None,
        )
        .await?;
        workspace_service::add_member(store, ws.id, principal.subject).await?;
        Ok(principal)
    }

    fn meta_credential(token: &str) -> UpsertIntegration {
        UpsertIntegration {
            provider: "META".into(),
            external_id: "me".into(),
            access_token: token.into(),
            expires_at: None,
        }
    }

    #[tokio::test]
    async fn upsert_creates_then_refreshes_in_place() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let store = Store::new(get_db().await?);
        let principal = seed_principal(&store).await?;

        let created =
            upsert_integration(&store, &principal, meta_credential("enc_short")).await?;
        let refreshed =
            upsert_integration(&store, &principal, meta_credential("enc_long")).await?;
        assert_eq!(created.id, refreshed.id);
        assert_eq!(refreshed.access_token, "enc_long");

        let fetched = get_integration(&store, &principal, "META", "me").await?;
        assert_eq!(fetched.access_token, "enc_long");
        Ok(())
    }

    #[tokio::test]
    async fn disconnect_archives_the_credential() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let store = Store::new(get_db().await?);
        let principal = seed_principal(&store).await?;

        upsert_integration(&store, &principal, meta_credential("enc_tok")).await?;
        disconnect_integration(&store, &principal, "META", "me").await?;

        let gone = get_integration(&store, &principal, "META", "me").await;
        assert!(matches!(gone, Err(ServiceError::NotFound(_))));

        // Reconnecting revives the archived row rather than violating the
        // unique credential tuple.
        let revived = upsert_integration(&store, &principal, meta_credential("enc_new")).await?;
        assert!(revived.deleted_at.is_none());
        let back = get_integration(&store, &principal, "META", "me").await?;
        assert_eq!(back.id, revived.id);
        Ok(())
    }

    #[tokio::test]
    async fn upsert_without_membership_is_forbidden() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let store = Store::new(get_db().await?);
        let stranger = Principal::new(Uuid::new_v4());
        let result = upsert_integration(&store, &stranger, meta_credential("enc")).await;
        assert!(matches!(result, Err(ServiceError::Forbidden(_))));
        Ok(())
    }
}
