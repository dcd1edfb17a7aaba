use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying engine failure, propagated verbatim. Never retried here.
    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),
    /// A single-row operation matched no rows.
    #[error("no rows matched the predicate")]
    RowNotFound,
}
