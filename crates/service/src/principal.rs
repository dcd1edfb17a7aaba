use uuid::Uuid;

/// Authenticated caller as produced by the external authentication
/// collaborator. Only the stable subject id matters to this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub subject: Uuid,
}

impl Principal {
    pub fn new(subject: Uuid) -> Self {
        Self { subject }
    }
}
