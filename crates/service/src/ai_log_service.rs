//! AI token-usage ledger. Writes are appends; there is no delete operation at
//! this layer and the store never filters ledger reads.

use chrono::Utc;
use sea_orm::Set;
use uuid::Uuid;

use common::pagination::Pagination;
use models::ai_log;
use store::{Query, Store};

use crate::access;
use crate::errors::ServiceError;
use crate::principal::Principal;

#[derive(Debug, Clone)]
pub struct UsageRecord {
    pub provider: String,
    pub model: String,
    pub kind: String,
    pub input_tokens: i32,
    pub output_tokens: i32,
    pub total_tokens: i32,
}

/// Append a usage entry for the principal's workspace.
pub async fn record_usage(
    store: &Store,
    principal: &Principal,
    usage: UsageRecord,
) -> Result<ai_log::Model, ServiceError> {
    let workspace_id = access::require_workspace(store, principal).await?;
    let entry = store
        .create::<ai_log::Entity>(ai_log::ActiveModel {
            user_id: Set(principal.subject),
            workspace_id: Set(workspace_id),
            provider: Set(usage.provider),
            model: Set(usage.model),
            kind: Set(usage.kind),
            input_tokens: Set(usage.input_tokens),
            output_tokens: Set(usage.output_tokens),
            total_tokens: Set(usage.total_tokens),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        })
        .await?;
    tracing::debug!(
        workspace_id = %workspace_id,
        total_tokens = entry.total_tokens,
        "ai usage recorded"
    );
    Ok(entry)
}

/// Page through the workspace ledger, newest first.
pub async fn list_usage(
    store: &Store,
    principal: &Principal,
    opts: Pagination,
) -> Result<Vec<ai_log::Model>, ServiceError> {
    let workspace_id = access::require_workspace(store, principal).await?;
    let (page_idx, per_page) = opts.normalize();
    let rows = store
        .find_many::<ai_log::Entity>(
            Query::new()
                .filter(access::workspace_scope(ai_log::Column::WorkspaceId, &[workspace_id]))
                .order_by_desc(ai_log::Column::CreatedAt)
                .offset(page_idx * per_page)
                .limit(per_page),
        )
        .await?;
    Ok(rows)
}
