//! Service layer providing business-oriented operations on top of the
//! mediated store.
//! - Tenant access resolution and authorization live in `access`; it is the
//!   only place workspace-scope predicates are built.
//! - Domain services (campaigns, workspaces, integrations, AI usage ledger)
//!   authorize before they mutate and never bypass the store.

pub mod errors;
pub mod principal;
pub mod access;
pub mod workspace_service;
pub mod campaign_service;
pub mod integration_service;
pub mod ai_log_service;
#[cfg(test)]
pub mod test_support;
