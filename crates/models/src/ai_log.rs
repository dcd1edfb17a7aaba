use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::workspace;

/// Append-only AI token-usage ledger. Has no `deleted_at` column on purpose:
/// ledger rows are exempt from soft-delete interception and visibility
/// filtering.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ai_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: Uuid,
    pub workspace_id: Uuid,
    pub provider: String,
    pub model: String,
    pub kind: String,
    pub input_tokens: i32,
    pub output_tokens: i32,
    pub total_tokens: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Workspace,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Workspace => Entity::belongs_to(workspace::Entity)
                .from(Column::WorkspaceId)
                .to(workspace::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
