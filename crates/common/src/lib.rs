//! Shared utilities for the trax backend crates.

pub mod pagination;
pub mod utils;
