//! Tenant access guard.
//!
//! Resolves the calling principal's workspace memberships and scopes every
//! by-id read or mutation to them. Lack of membership is reported as NotFound
//! for entity access so callers cannot distinguish "does not exist" from
//! "exists in a foreign workspace"; only list/creation scope surfaces
//! Forbidden.

use sea_orm::{ColumnTrait, Condition};
use uuid::Uuid;

use models::{campaign, workspace_member};
use store::{Query, Store};

use crate::errors::ServiceError;
use crate::principal::Principal;

/// All workspace ids the principal is a member of. Empty is a valid result.
pub async fn accessible_workspaces(
    store: &Store,
    principal: &Principal,
) -> Result<Vec<Uuid>, ServiceError> {
    let members = store
        .find_many::<workspace_member::Entity>(
            Query::new().filter(workspace_member::Column::UserId.eq(principal.subject)),
        )
        .await?;
    Ok(members.into_iter().map(|m| m.workspace_id).collect())
}

/// First accessible workspace, used where the operation cannot yet express an
/// explicit workspace choice (creation paths). Forbidden if there is none.
pub async fn require_workspace(store: &Store, principal: &Principal) -> Result<Uuid, ServiceError> {
    accessible_workspaces(store, principal)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| ServiceError::Forbidden("principal has no workspace".into()))
}

/// The single construction point for workspace-scope predicates. Every call
/// site passes the scoped entity's workspace column so the shape of the
/// predicate can never diverge between paths.
pub fn workspace_scope<C: ColumnTrait>(workspace_column: C, workspace_ids: &[Uuid]) -> Condition {
    Condition::all().add(workspace_column.is_in(workspace_ids.iter().copied()))
}

/// Load a campaign the principal may touch. Missing row, archived row and
/// foreign-workspace row all collapse into NotFound.
pub async fn authorize_campaign(
    store: &Store,
    principal: &Principal,
    id: Uuid,
) -> Result<campaign::Model, ServiceError> {
    let workspace_ids = accessible_workspaces(store, principal).await?;
    if workspace_ids.is_empty() {
        return Err(ServiceError::not_found("campaign"));
    }
    let found = store
        .find_first::<campaign::Entity>(
            Query::new()
                .filter(campaign::Column::Id.eq(id))
                .filter(workspace_scope(campaign::Column::WorkspaceId, &workspace_ids)),
        )
        .await?;
    found.ok_or_else(|| ServiceError::not_found("campaign"))
}
