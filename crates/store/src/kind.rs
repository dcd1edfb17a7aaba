/// Every entity kind the store knows about. Adding a table means adding a
/// variant here and classifying it in `is_auditable`; the compiler and the
/// exhaustiveness test keep the set closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Workspace,
    WorkspaceMember,
    Campaign,
    AdCreative,
    Integration,
    AiLog,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Workspace,
        EntityKind::WorkspaceMember,
        EntityKind::Campaign,
        EntityKind::AdCreative,
        EntityKind::Integration,
        EntityKind::AiLog,
    ];

    /// Whether the kind is subject to soft-delete interception and default
    /// visibility filtering. Ledger and join records are exempt: their deletes
    /// stay physical and their reads are never filtered.
    pub const fn is_auditable(self) -> bool {
        match self {
            EntityKind::Campaign | EntityKind::AdCreative | EntityKind::Integration => true,
            EntityKind::Workspace | EntityKind::WorkspaceMember | EntityKind::AiLog => false,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            EntityKind::Workspace => "workspace",
            EntityKind::WorkspaceMember => "workspace_member",
            EntityKind::Campaign => "campaign",
            EntityKind::AdCreative => "ad_creative",
            EntityKind::Integration => "integration",
            EntityKind::AiLog => "ai_log",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EntityKind;

    #[test]
    fn every_kind_is_classified() {
        for kind in EntityKind::ALL {
            // Exercises the exhaustive match for each variant.
            let _ = kind.is_auditable();
            assert!(!kind.name().is_empty());
        }
    }

    #[test]
    fn ledger_and_join_kinds_are_exempt() {
        assert!(!EntityKind::AiLog.is_auditable());
        assert!(!EntityKind::Workspace.is_auditable());
        assert!(!EntityKind::WorkspaceMember.is_auditable());
        assert!(EntityKind::Campaign.is_auditable());
        assert!(EntityKind::AdCreative.is_auditable());
        assert!(EntityKind::Integration.is_auditable());
    }
}
