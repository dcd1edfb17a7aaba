//! Structured read descriptors the mediator rewrites.

use sea_orm::sea_query::IntoCondition;
use sea_orm::{Condition, Order};

use crate::entity::StoreEntity;

/// Caller intent on the soft-delete predicate of an auditable entity.
///
/// `Default` means the caller expressed nothing, so the mediator injects
/// `deleted_at IS NULL`. The explicit variants always win over injection.
/// On exempt kinds all variants are ignored and the read passes through
/// unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeletedVisibility {
    #[default]
    Default,
    /// Explicitly live rows only.
    Live,
    /// Explicitly archived rows only.
    DeletedOnly,
    /// No soft-delete predicate at all.
    Any,
}

/// Read descriptor: predicate, soft-delete intent, ordering and limit.
/// Pure data until the mediator turns it into a statement.
#[derive(Clone, Debug)]
pub struct Query<E: StoreEntity> {
    pub(crate) filter: Condition,
    pub(crate) visibility: DeletedVisibility,
    pub(crate) order: Vec<(E::Column, Order)>,
    pub(crate) limit: Option<u64>,
    pub(crate) offset: Option<u64>,
}

impl<E: StoreEntity> Query<E> {
    pub fn new() -> Self {
        Self {
            filter: Condition::all(),
            visibility: DeletedVisibility::Default,
            order: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// AND another predicate onto the descriptor.
    pub fn filter<F: IntoCondition>(mut self, filter: F) -> Self {
        self.filter = self.filter.add(filter.into_condition());
        self
    }

    pub fn visibility(mut self, visibility: DeletedVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn order_by_asc(mut self, column: E::Column) -> Self {
        self.order.push((column, Order::Asc));
        self
    }

    pub fn order_by_desc(mut self, column: E::Column) -> Self {
        self.order.push((column, Order::Desc));
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl<E: StoreEntity> Default for Query<E> {
    fn default() -> Self {
        Self::new()
    }
}
