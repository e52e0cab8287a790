//! Handlers for the `/attributes` resource.
//!
//! Attributes blocks are standalone; there is no parent to resolve.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use realmbuilder_core::error::CoreError;
use realmbuilder_core::types::DbId;
use realmbuilder_db::models::attributes::{
    Attributes, CreateAttributes, PatchAttributes, UpdateAttributes,
};
use realmbuilder_db::repositories::AttributesRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{validate_create_id, validate_update_id};
use crate::state::AppState;

/// POST /api/v1/attributes
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAttributes>,
) -> AppResult<(StatusCode, Json<Attributes>)> {
    validate_create_id(input.id, "attributes block").map_err(AppError::Core)?;

    let attributes = AttributesRepo::create(&state.pool, &input).await?;
    tracing::info!(attributes_id = attributes.id, "Attributes created");
    Ok((StatusCode::CREATED, Json(attributes)))
}

/// GET /api/v1/attributes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Attributes>>> {
    let attributes = AttributesRepo::list(&state.pool).await?;
    Ok(Json(attributes))
}

/// GET /api/v1/attributes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Attributes>> {
    let attributes = AttributesRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Attributes",
            id,
        }))?;
    Ok(Json(attributes))
}

/// PUT /api/v1/attributes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAttributes>,
) -> AppResult<Json<Attributes>> {
    validate_update_id(id, input.id).map_err(AppError::Core)?;

    let attributes = AttributesRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Attributes",
            id,
        }))?;
    Ok(Json(attributes))
}

/// PATCH /api/v1/attributes/{id}
///
/// Merge-patch: only non-null scores overwrite stored values.
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<PatchAttributes>,
) -> AppResult<Json<Attributes>> {
    validate_update_id(id, patch.id).map_err(AppError::Core)?;

    let attributes = AttributesRepo::partial_update(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Attributes",
            id,
        }))?;
    Ok(Json(attributes))
}

/// DELETE /api/v1/attributes/{id}
///
/// Deleting an absent id is a no-op; DELETE is idempotent.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let removed = AttributesRepo::delete(&state.pool, id).await?;
    if removed {
        tracing::info!(attributes_id = id, "Attributes deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}
