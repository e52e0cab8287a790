//! Character entity model and DTOs.

use realmbuilder_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A character row from the `characters` table.
///
/// A character always belongs to exactly one game once persisted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub game_id: DbId,
    pub first_name: String,
    pub second_name: Option<String>,
    pub race: Option<String>,
    pub classification: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new character. The owning game comes from the URL
/// path, never from the payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacter {
    pub id: Option<DbId>,
    pub first_name: String,
    pub second_name: Option<String>,
    pub race: Option<String>,
    pub classification: Option<String>,
    pub description: Option<String>,
}

/// DTO for a full update (PUT). Replaces every mutable field, so omitted
/// nullable fields are cleared.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCharacter {
    pub id: Option<DbId>,
    pub first_name: String,
    pub second_name: Option<String>,
    pub race: Option<String>,
    pub classification: Option<String>,
    pub description: Option<String>,
}

/// DTO for a merge-patch (PATCH). Only non-null fields overwrite stored
/// values; there is no way to clear a field through a patch.
#[derive(Debug, Clone, Deserialize)]
pub struct PatchCharacter {
    pub id: Option<DbId>,
    pub first_name: Option<String>,
    pub second_name: Option<String>,
    pub race: Option<String>,
    pub classification: Option<String>,
    pub description: Option<String>,
}
