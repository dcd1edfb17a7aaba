//! Workspace bootstrap operations. Workspaces and memberships are never
//! soft-deleted; the store passes them through unchanged.

use chrono::Utc;
use sea_orm::Set;
use uuid::Uuid;

use models::{workspace, workspace_member};
use store::Store;

use crate::errors::ServiceError;

/// Create a workspace with its brand metadata.
pub async fn create_workspace(
    store: &Store,
    name: &str,
    brand_voice: Option<String>,
    brand_colors: Option<String>,
) -> Result<workspace::Model, ServiceError> {
    workspace::validate_name(name)?;
    let created = store
        .create::<workspace::Entity>(workspace::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            brand_voice: Set(brand_voice),
            brand_colors: Set(brand_colors),
            created_at: Set(Utc::now().into()),
        })
        .await?;
    tracing::info!(workspace_id = %created.id, "workspace created");
    Ok(created)
}

/// Attach an external user to a workspace. The unique (user, workspace) pair
/// is enforced by the schema; a duplicate join surfaces the engine's
/// constraint error.
pub async fn add_member(
    store: &Store,
    workspace_id: Uuid,
    user_id: Uuid,
) -> Result<workspace_member::Model, ServiceError> {
    let member = store
        .create::<workspace_member::Entity>(workspace_member::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            workspace_id: Set(workspace_id),
            created_at: Set(Utc::now().into()),
        })
        .await?;
    Ok(member)
}

/// Get workspace by id.
pub async fn get_workspace(store: &Store, id: Uuid) -> Result<Option<workspace::Model>, ServiceError> {
    Ok(store.find_unique::<workspace::Entity>(id).await?)
}
