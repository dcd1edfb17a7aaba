//! Mediated storage client enforcing soft-delete semantics.
//!
//! Every read and write the services issue goes through [`Store`], a thin
//! decorator around the SeaORM connection. For entity kinds marked auditable
//! it applies two rewrites before the statement reaches the database:
//!
//! - deletes become updates that set `deleted_at = now()`, preserving the
//!   caller's predicate verbatim;
//! - reads without explicit soft-delete intent get `deleted_at IS NULL`
//!   injected. Explicit caller intent always wins over the injection.
//!
//! Exempt kinds (ledger and join records) pass through unchanged: physical
//! deletes, unfiltered reads. The mediator holds no state and never retries;
//! storage errors propagate verbatim.

pub mod entity;
pub mod errors;
pub mod kind;
pub mod mediator;
pub mod query;


pub use entity::StoreEntity;
pub use errors::StoreError;
pub use kind::EntityKind;
pub use mediator::Store;
pub use query::{DeletedVisibility, Query};
