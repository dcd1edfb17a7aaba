//! SeaORM entity definitions for the trax backend.
//!
//! Entities carry their schema and field-level validation only; all
//! persistence flows through the mediated store in the `store` crate.

pub mod errors;
pub mod db;
pub mod workspace;
pub mod workspace_member;
pub mod campaign;
pub mod ad_creative;
pub mod integration;
pub mod ai_log;
