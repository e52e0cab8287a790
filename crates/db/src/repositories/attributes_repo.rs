//! Repository for the `attributes` table.

use realmbuilder_core::types::DbId;
use sqlx::PgPool;

use crate::models::attributes::{Attributes, CreateAttributes, PatchAttributes, UpdateAttributes};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, strength, dexterity, constitution, intelligence, wisdom, charisma, \
     created_at, updated_at";

/// Provides CRUD operations for attributes blocks.
pub struct AttributesRepo;

impl AttributesRepo {
    /// Insert a new attributes block, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAttributes) -> Result<Attributes, sqlx::Error> {
        let query = format!(
            "INSERT INTO attributes (strength, dexterity, constitution, intelligence, wisdom, charisma)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attributes>(&query)
            .bind(input.strength)
            .bind(input.dexterity)
            .bind(input.constitution)
            .bind(input.intelligence)
            .bind(input.wisdom)
            .bind(input.charisma)
            .fetch_one(pool)
            .await
    }

    /// Find an attributes block by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Attributes>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM attributes WHERE id = $1");
        sqlx::query_as::<_, Attributes>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all attributes blocks, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Attributes>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM attributes ORDER BY id ASC");
        sqlx::query_as::<_, Attributes>(&query).fetch_all(pool).await
    }

    /// Fully replace all six ability scores.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAttributes,
    ) -> Result<Option<Attributes>, sqlx::Error> {
        let query = format!(
            "UPDATE attributes SET
                strength = $2,
                dexterity = $3,
                constitution = $4,
                intelligence = $5,
                wisdom = $6,
                charisma = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attributes>(&query)
            .bind(id)
            .bind(input.strength)
            .bind(input.dexterity)
            .bind(input.constitution)
            .bind(input.intelligence)
            .bind(input.wisdom)
            .bind(input.charisma)
            .fetch_optional(pool)
            .await
    }

    /// Merge-patch an attributes block. Only non-`None` scores in `patch`
    /// are applied.
    ///
    /// Returns `None` if no row with the given `id` exists; nothing is
    /// mutated in that case.
    pub async fn partial_update(
        pool: &PgPool,
        id: DbId,
        patch: &PatchAttributes,
    ) -> Result<Option<Attributes>, sqlx::Error> {
        let query = format!(
            "UPDATE attributes SET
                strength = COALESCE($2, strength),
                dexterity = COALESCE($3, dexterity),
                constitution = COALESCE($4, constitution),
                intelligence = COALESCE($5, intelligence),
                wisdom = COALESCE($6, wisdom),
                charisma = COALESCE($7, charisma)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attributes>(&query)
            .bind(id)
            .bind(patch.strength)
            .bind(patch.dexterity)
            .bind(patch.constitution)
            .bind(patch.intelligence)
            .bind(patch.wisdom)
            .bind(patch.charisma)
            .fetch_optional(pool)
            .await
    }

    /// Delete an attributes block by id. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM attributes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
