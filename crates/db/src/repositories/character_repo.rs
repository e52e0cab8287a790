//! Repository for the `characters` table.

use realmbuilder_core::page::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use realmbuilder_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::{Character, CreateCharacter, PatchCharacter, UpdateCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, game_id, first_name, second_name, race, classification, description, \
     created_at, updated_at";

/// Provides CRUD operations for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character under `game_id`, returning the created row.
    ///
    /// The caller resolves the game reference first; the FK constraint is
    /// the backstop, not the primary check.
    pub async fn create(
        pool: &PgPool,
        game_id: DbId,
        input: &CreateCharacter,
    ) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (game_id, first_name, second_name, race, classification, description)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(game_id)
            .bind(&input.first_name)
            .bind(&input.second_name)
            .bind(&input.race)
            .bind(&input.classification)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a character by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of characters for a given game, ordered by first name
    /// then id. Limit and offset are clamped to valid bounds.
    pub async fn list_by_game(
        pool: &PgPool,
        game_id: DbId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Character>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {COLUMNS} FROM characters
             WHERE game_id = $1
             ORDER BY first_name ASC, id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(game_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Fully replace a character's mutable fields and owning game.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        game_id: DbId,
        input: &UpdateCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters SET
                game_id = $2,
                first_name = $3,
                second_name = $4,
                race = $5,
                classification = $6,
                description = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(game_id)
            .bind(&input.first_name)
            .bind(&input.second_name)
            .bind(&input.race)
            .bind(&input.classification)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Merge-patch a character. Only non-`None` fields in `patch` are
    /// applied; the owning game is never touched by a patch.
    ///
    /// Returns `None` if no row with the given `id` exists; nothing is
    /// mutated in that case. Applying the same patch twice yields the same
    /// row as applying it once.
    pub async fn partial_update(
        pool: &PgPool,
        id: DbId,
        patch: &PatchCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters SET
                first_name = COALESCE($2, first_name),
                second_name = COALESCE($3, second_name),
                race = COALESCE($4, race),
                classification = COALESCE($5, classification),
                description = COALESCE($6, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&patch.first_name)
            .bind(&patch.second_name)
            .bind(&patch.race)
            .bind(&patch.classification)
            .bind(&patch.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a character by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
