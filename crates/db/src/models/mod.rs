//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` full-update DTO for PUT requests
//! - A `Deserialize` patch DTO (all `Option` fields) for merge-patches
//!
//! Create/update/patch DTOs carry an optional `id` so the handler layer
//! can enforce request-shape invariants (id absent on create, present and
//! matching on update) before any store access.

pub mod attributes;
pub mod character;
pub mod game;
