//! Handlers for the `/games` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use realmbuilder_core::error::CoreError;
use realmbuilder_core::types::DbId;
use realmbuilder_db::models::game::{CreateGame, Game, PatchGame, UpdateGame};
use realmbuilder_db::repositories::GameRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{validate_create_id, validate_update_id};
use crate::state::AppState;

/// POST /api/v1/games
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGame>,
) -> AppResult<(StatusCode, Json<Game>)> {
    validate_create_id(input.id, "game").map_err(AppError::Core)?;

    let game = GameRepo::create(&state.pool, &input).await?;
    tracing::info!(game_id = game.id, "Game created");
    Ok((StatusCode::CREATED, Json(game)))
}

/// GET /api/v1/games
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Game>>> {
    let games = GameRepo::list(&state.pool).await?;
    Ok(Json(games))
}

/// GET /api/v1/games/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Game>> {
    let game = GameRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Game", id }))?;
    Ok(Json(game))
}

/// PUT /api/v1/games/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGame>,
) -> AppResult<Json<Game>> {
    validate_update_id(id, input.id).map_err(AppError::Core)?;

    let game = GameRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Game", id }))?;
    Ok(Json(game))
}

/// PATCH /api/v1/games/{id}
///
/// Merge-patch: only non-null payload fields overwrite stored values.
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<PatchGame>,
) -> AppResult<Json<Game>> {
    validate_update_id(id, patch.id).map_err(AppError::Core)?;

    let game = GameRepo::partial_update(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Game", id }))?;
    Ok(Json(game))
}

/// DELETE /api/v1/games/{id}
///
/// Deleting an absent id is a no-op; DELETE is idempotent.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let removed = GameRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(game_id = id, "Game deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}
