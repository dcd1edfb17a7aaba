//! The mediated storage client.

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection,
    EntityTrait, IntoActiveModel, PaginatorTrait, PrimaryKeyTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, TryGetable, Value,
};
use tracing::debug;

use crate::entity::StoreEntity;
use crate::errors::StoreError;
use crate::query::{DeletedVisibility, Query};

/// Decorator around the SeaORM connection exposing the full query surface, so
/// call sites stay unaware of the soft-delete interception. Stateless; safe to
/// clone per call.
#[derive(Clone, Debug)]
pub struct Store {
    db: DatabaseConnection,
}

/// Inject the soft-delete predicate according to caller intent. Exempt kinds
/// (no marker column) pass through untouched regardless of intent.
pub(crate) fn apply_visibility<E: StoreEntity>(
    select: Select<E>,
    visibility: DeletedVisibility,
) -> Select<E> {
    let Some(col) = E::deleted_at_column() else {
        return select;
    };
    match visibility {
        DeletedVisibility::Default | DeletedVisibility::Live => select.filter(col.is_null()),
        DeletedVisibility::DeletedOnly => select.filter(col.is_not_null()),
        DeletedVisibility::Any => select,
    }
}

pub(crate) fn build_select<E: StoreEntity>(query: Query<E>) -> Select<E> {
    let mut select = apply_visibility(E::find().filter(query.filter), query.visibility);
    for (column, order) in query.order {
        select = select.order_by(column, order);
    }
    if let Some(limit) = query.limit {
        select = select.limit(limit);
    }
    if let Some(offset) = query.offset {
        select = select.offset(offset);
    }
    select
}

pub(crate) fn build_grouped_count<E: StoreEntity>(query: Query<E>, group: E::Column) -> Select<E> {
    build_select(query)
        .select_only()
        .column(group)
        .column_as(group.count(), "row_count")
        .group_by(group)
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Raw connection escape hatch for migrations and test inspection.
    /// Application reads and writes must go through the mediated methods.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn find_many<E>(&self, query: Query<E>) -> Result<Vec<E::Model>, StoreError>
    where
        E: StoreEntity,
    {
        Ok(build_select(query).all(&self.db).await?)
    }

    pub async fn find_first<E>(&self, query: Query<E>) -> Result<Option<E::Model>, StoreError>
    where
        E: StoreEntity,
    {
        Ok(build_select(query).one(&self.db).await?)
    }

    /// Primary-key lookup. Filtered like every other read: an archived row is
    /// not found unless the caller passes explicit visibility via
    /// [`Store::find_first`].
    pub async fn find_unique<E>(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Result<Option<E::Model>, StoreError>
    where
        E: StoreEntity,
    {
        let select = apply_visibility(E::find_by_id(id), DeletedVisibility::Default);
        Ok(select.one(&self.db).await?)
    }

    pub async fn count<E>(&self, query: Query<E>) -> Result<u64, StoreError>
    where
        E: StoreEntity,
        E::Model: Send + Sync,
    {
        Ok(build_select(query).count(&self.db).await?)
    }

    /// Row counts per distinct value of `group`, in one statement. Subject to
    /// the same visibility injection as every other read.
    pub async fn count_grouped<E, T>(
        &self,
        query: Query<E>,
        group: E::Column,
    ) -> Result<Vec<(T, u64)>, StoreError>
    where
        E: StoreEntity,
        T: TryGetable,
    {
        let rows: Vec<(T, i64)> = build_grouped_count(query, group)
            .into_tuple()
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(|(key, n)| (key, n as u64)).collect())
    }

    pub async fn create<E>(&self, model: E::ActiveModel) -> Result<E::Model, StoreError>
    where
        E: StoreEntity,
        E::Model: IntoActiveModel<E::ActiveModel>,
        E::ActiveModel: ActiveModelBehavior + Send,
    {
        Ok(model.insert(&self.db).await?)
    }

    /// Single-row update from an ActiveModel; a vanished row surfaces as the
    /// engine's own not-updated error.
    pub async fn update<E>(&self, model: E::ActiveModel) -> Result<E::Model, StoreError>
    where
        E: StoreEntity,
        E::Model: IntoActiveModel<E::ActiveModel>,
        E::ActiveModel: ActiveModelBehavior + Send,
    {
        Ok(model.update(&self.db).await?)
    }

    pub async fn update_many<E>(
        &self,
        filter: Condition,
        values: Vec<(E::Column, Value)>,
    ) -> Result<u64, StoreError>
    where
        E: StoreEntity,
    {
        let mut stmt = E::update_many().filter(filter);
        for (column, value) in values {
            stmt = stmt.col_expr(column, Expr::value(value));
        }
        let result = stmt.exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    /// Delete-shaped single-row call. On auditable kinds this is rewritten to
    /// an update setting `deleted_at = now()` with the caller's predicate kept
    /// verbatim; on exempt kinds the row is physically removed. Zero matched
    /// rows is [`StoreError::RowNotFound`].
    pub async fn delete<E>(&self, filter: Condition) -> Result<(), StoreError>
    where
        E: StoreEntity,
    {
        let affected = self.delete_many::<E>(filter).await?;
        if affected == 0 {
            return Err(StoreError::RowNotFound);
        }
        Ok(())
    }

    /// Delete-shaped multi-row call; returns the affected-row count (zero is
    /// not an error). Same rewrite as [`Store::delete`].
    pub async fn delete_many<E>(&self, filter: Condition) -> Result<u64, StoreError>
    where
        E: StoreEntity,
    {
        match E::deleted_at_column() {
            Some(column) => {
                debug!(entity = E::KIND.name(), "rewriting delete to soft-delete update");
                let result = E::update_many()
                    .col_expr(column, Expr::value(Utc::now()))
                    .filter(filter)
                    .exec(&self.db)
                    .await?;
                Ok(result.rows_affected)
            }
            None => {
                let result = E::delete_many().filter(filter).exec(&self.db).await?;
                Ok(result.rows_affected)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{ai_log, campaign};
    use sea_orm::{DbBackend, QueryTrait};
    use uuid::Uuid;

    fn to_sql<E: StoreEntity>(query: Query<E>) -> String {
        build_select(query).build(DbBackend::Postgres).to_string()
    }

    #[test]
    fn default_read_injects_live_filter() {
        let sql = to_sql(Query::<campaign::Entity>::new());
        assert!(sql.contains(r#""deleted_at" IS NULL"#), "{sql}");
    }

    #[test]
    fn explicit_intent_wins_over_injection() {
        let sql = to_sql(Query::<campaign::Entity>::new().visibility(DeletedVisibility::DeletedOnly));
        assert!(sql.contains(r#""deleted_at" IS NOT NULL"#), "{sql}");

        let sql = to_sql(Query::<campaign::Entity>::new().visibility(DeletedVisibility::Any));
        assert!(!sql.contains("deleted_at"), "{sql}");
    }

    #[test]
    fn exempt_kind_reads_pass_through() {
        for visibility in [
            DeletedVisibility::Default,
            DeletedVisibility::Live,
            DeletedVisibility::DeletedOnly,
            DeletedVisibility::Any,
        ] {
            let sql = to_sql(Query::<ai_log::Entity>::new().visibility(visibility));
            assert!(!sql.contains("deleted_at"), "{sql}");
        }
    }

    #[test]
    fn caller_predicate_is_preserved_alongside_injection() {
        let sql = to_sql(
            Query::<campaign::Entity>::new().filter(campaign::Column::Name.eq("spring launch")),
        );
        assert!(sql.contains(r#""name""#), "{sql}");
        assert!(sql.contains(r#""deleted_at" IS NULL"#), "{sql}");
    }

    #[test]
    fn find_unique_lookup_is_filtered() {
        let select = apply_visibility(
            campaign::Entity::find_by_id(Uuid::nil()),
            DeletedVisibility::Default,
        );
        let sql = select.build(DbBackend::Postgres).to_string();
        assert!(sql.contains(r#""deleted_at" IS NULL"#), "{sql}");
    }

    #[test]
    fn grouped_count_is_a_single_filtered_statement() {
        use models::ad_creative;
        let sql = build_grouped_count(
            Query::<ad_creative::Entity>::new()
                .filter(ad_creative::Column::CampaignId.is_in([Uuid::nil()])),
            ad_creative::Column::CampaignId,
        )
        .build(DbBackend::Postgres)
        .to_string();
        assert!(sql.contains(r#"GROUP BY "ad_creative"."campaign_id""#), "{sql}");
        assert!(sql.contains(r#""deleted_at" IS NULL"#), "{sql}");
        assert!(sql.contains("COUNT"), "{sql}");
    }

    #[test]
    fn listing_order_and_limit_are_applied() {
        let sql = to_sql(
            Query::<campaign::Entity>::new()
                .order_by_desc(campaign::Column::CreatedAt)
                .limit(10),
        );
        assert!(sql.contains(r#"ORDER BY "campaign"."created_at" DESC"#), "{sql}");
        assert!(sql.contains("LIMIT 10"), "{sql}");
    }
}
