//! Binding between SeaORM entities and the mediator's entity-kind registry.

use sea_orm::EntityTrait;

use crate::kind::EntityKind;

/// Marker connecting a SeaORM entity to its [`EntityKind`].
///
/// Auditable kinds must expose their soft-delete column here. A kind that
/// claims auditability without a column (or the reverse) is a schema
/// misconfiguration; the agreement is asserted for every kind in this
/// module's tests rather than checked at runtime.
pub trait StoreEntity: EntityTrait {
    const KIND: EntityKind;

    /// Soft-delete marker column, present only on auditable entities.
    fn deleted_at_column() -> Option<Self::Column> {
        None
    }
}

impl StoreEntity for models::workspace::Entity {
    const KIND: EntityKind = EntityKind::Workspace;
}

impl StoreEntity for models::workspace_member::Entity {
    const KIND: EntityKind = EntityKind::WorkspaceMember;
}

impl StoreEntity for models::campaign::Entity {
    const KIND: EntityKind = EntityKind::Campaign;

    fn deleted_at_column() -> Option<Self::Column> {
        Some(models::campaign::Column::DeletedAt)
    }
}

impl StoreEntity for models::ad_creative::Entity {
    const KIND: EntityKind = EntityKind::AdCreative;

    fn deleted_at_column() -> Option<Self::Column> {
        Some(models::ad_creative::Column::DeletedAt)
    }
}

impl StoreEntity for models::integration::Entity {
    const KIND: EntityKind = EntityKind::Integration;

    fn deleted_at_column() -> Option<Self::Column> {
        Some(models::integration::Column::DeletedAt)
    }
}

impl StoreEntity for models::ai_log::Entity {
    const KIND: EntityKind = EntityKind::AiLog;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_classification<E: StoreEntity>() {
        assert_eq!(
            E::KIND.is_auditable(),
            E::deleted_at_column().is_some(),
            "kind {:?} disagrees with its schema about soft-delete",
            E::KIND,
        );
    }

    /// One check per `EntityKind` variant; a new variant without a matching
    /// line here fails the count assertion below.
    #[test]
    fn auditability_matches_schema_for_every_kind() {
        assert_classification::<models::workspace::Entity>();
        assert_classification::<models::workspace_member::Entity>();
        assert_classification::<models::campaign::Entity>();
        assert_classification::<models::ad_creative::Entity>();
        assert_classification::<models::integration::Entity>();
        assert_classification::<models::ai_log::Entity>();
        assert_eq!(EntityKind::ALL.len(), 6);
    }
}
