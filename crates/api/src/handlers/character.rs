//! Handlers for the `/characters` resource.
//!
//! Characters are nested under games:
//! `/games/{game_id}/characters[/{id}]`
//!
//! Save and full update both resolve the owning game first and fail with
//! a typed reference error when it is absent; nothing is persisted on
//! that path.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use realmbuilder_core::error::CoreError;
use realmbuilder_core::types::DbId;
use realmbuilder_db::models::character::{
    Character, CreateCharacter, PatchCharacter, UpdateCharacter,
};
use realmbuilder_db::repositories::{CharacterRepo, GameRepo};
use realmbuilder_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::handlers::{validate_create_id, validate_update_id};
use crate::query::PaginationParams;
use crate::state::AppState;

/// Resolve the parent game or fail with a reference error.
async fn ensure_game_exists(pool: &DbPool, game_id: DbId) -> Result<(), AppError> {
    if GameRepo::exists(pool, game_id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::ReferenceNotFound {
            entity: "Game",
            id: game_id,
        }))
    }
}

/// POST /api/v1/games/{game_id}/characters
///
/// The owning game comes from the URL path, never from the payload.
pub async fn create(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
    Json(input): Json<CreateCharacter>,
) -> AppResult<(StatusCode, Json<Character>)> {
    validate_create_id(input.id, "character").map_err(AppError::Core)?;
    ensure_game_exists(&state.pool, game_id).await?;

    let character = CharacterRepo::create(&state.pool, game_id, &input).await?;
    tracing::info!(
        character_id = character.id,
        game_id = game_id,
        "Character created"
    );
    Ok((StatusCode::CREATED, Json(character)))
}

/// GET /api/v1/games/{game_id}/characters
///
/// Returns one page of characters scoped to the game.
pub async fn list_by_game(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Character>>> {
    let characters =
        CharacterRepo::list_by_game(&state.pool, game_id, params.limit, params.offset).await?;
    Ok(Json(characters))
}

/// GET /api/v1/games/{game_id}/characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((_game_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character))
}

/// PUT /api/v1/games/{game_id}/characters/{id}
///
/// Full replace: every mutable field is set from the payload, so omitted
/// nullable fields are cleared. The game reference is re-resolved from
/// the path.
pub async fn update(
    State(state): State<AppState>,
    Path((game_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateCharacter>,
) -> AppResult<Json<Character>> {
    validate_update_id(id, input.id).map_err(AppError::Core)?;
    ensure_game_exists(&state.pool, game_id).await?;

    let character = CharacterRepo::update(&state.pool, id, game_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character))
}

/// PATCH /api/v1/games/{game_id}/characters/{id}
///
/// Merge-patch: only non-null payload fields overwrite stored values; a
/// null field means "leave unchanged", never "clear". The owning game is
/// not touched.
pub async fn partial_update(
    State(state): State<AppState>,
    Path((_game_id, id)): Path<(DbId, DbId)>,
    Json(patch): Json<PatchCharacter>,
) -> AppResult<Json<Character>> {
    validate_update_id(id, patch.id).map_err(AppError::Core)?;

    let character = CharacterRepo::partial_update(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character))
}

/// DELETE /api/v1/games/{game_id}/characters/{id}
///
/// Deleting an absent id is a no-op; DELETE is idempotent.
pub async fn delete(
    State(state): State<AppState>,
    Path((_game_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let removed = CharacterRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(character_id = id, "Character deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}
