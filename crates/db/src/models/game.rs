//! Game entity model and DTOs.

use realmbuilder_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A game row from the `games` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Game {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new game. The store assigns the id; a payload that
/// pre-sets one is rejected at the boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGame {
    pub id: Option<DbId>,
    pub name: String,
    pub description: Option<String>,
}

/// DTO for a full update (PUT). `id` must be present and equal the path id.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGame {
    pub id: Option<DbId>,
    pub name: String,
    pub description: Option<String>,
}

/// DTO for a merge-patch (PATCH). Only non-null fields overwrite stored
/// values; null means "leave unchanged".
#[derive(Debug, Clone, Deserialize)]
pub struct PatchGame {
    pub id: Option<DbId>,
    pub name: Option<String>,
    pub description: Option<String>,
}
