//! Shared domain types for the realm-builder backend.
//!
//! This crate has zero internal dependencies so it can be used by both the
//! persistence layer (`realmbuilder-db`) and the HTTP layer
//! (`realmbuilder-api`).

pub mod error;
pub mod page;
pub mod types;
