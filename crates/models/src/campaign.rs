use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;
use crate::workspace;

/// Status every campaign is created with. Later statuses are opaque
/// pass-through values owned by the product layer.
pub const STATUS_DRAFT: &str = "DRAFT";

/// Campaign owned by exactly one workspace. `workspace_id` is immutable after
/// creation; `deleted_at` is the soft-delete marker the store injects and
/// filters on.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "campaign")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    pub objective: String,
    pub platform: String,
    pub status: String,
    pub description: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Workspace,
    AdCreative,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Workspace => Entity::belongs_to(workspace::Entity)
                .from(Column::WorkspaceId)
                .to(workspace::Column::Id)
                .into(),
            Relation::AdCreative => Entity::has_many(crate::ad_creative::Entity).into(),
        }
    }
}

impl Related<workspace::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Workspace.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    if name.len() > 200 {
        return Err(errors::ModelError::Validation("name too long".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_validation_bounds() {
        assert!(validate_name("Spring Launch").is_ok());
        assert!(validate_name("  ").is_err());
        assert!(validate_name(&"x".repeat(201)).is_err());
    }
}
