use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Principal has no accessible workspace for an operation requiring one.
    #[error("forbidden: {0}")]
    Forbidden(String),
    /// Entity absent or outside the principal's accessible workspaces; the
    /// two causes are deliberately indistinguishable.
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
    #[error("storage error: {0}")]
    Store(#[from] store::StoreError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{} not found", entity))
    }
}
