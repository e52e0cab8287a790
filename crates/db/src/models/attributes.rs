//! Attributes entity model and DTOs.
//!
//! An attributes block is a flat set of ability scores. It is standalone:
//! no owning reference to another entity.

use realmbuilder_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An attributes row from the `attributes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attributes {
    pub id: DbId,
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new attributes block.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAttributes {
    pub id: Option<DbId>,
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

/// DTO for a full update (PUT). Replaces all six ability scores.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAttributes {
    pub id: Option<DbId>,
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

/// DTO for a merge-patch (PATCH). Only non-null scores overwrite.
#[derive(Debug, Clone, Deserialize)]
pub struct PatchAttributes {
    pub id: Option<DbId>,
    pub strength: Option<i32>,
    pub dexterity: Option<i32>,
    pub constitution: Option<i32>,
    pub intelligence: Option<i32>,
    pub wisdom: Option<i32>,
    pub charisma: Option<i32>,
}
