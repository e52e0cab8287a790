//! Route definitions for the `/games` resource.
//!
//! Also nests character routes under `/games/{game_id}/characters`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{character, game};
use crate::state::AppState;

/// Routes mounted at `/games`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> update
/// PATCH  /{id}                          -> partial_update
/// DELETE /{id}                          -> delete
///
/// GET    /{game_id}/characters          -> list_by_game
/// POST   /{game_id}/characters          -> create
/// GET    /{game_id}/characters/{id}     -> get_by_id
/// PUT    /{game_id}/characters/{id}     -> update
/// PATCH  /{game_id}/characters/{id}     -> partial_update
/// DELETE /{game_id}/characters/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    let character_routes = Router::new()
        .route("/", get(character::list_by_game).post(character::create))
        .route(
            "/{id}",
            get(character::get_by_id)
                .put(character::update)
                .patch(character::partial_update)
                .delete(character::delete),
        );

    Router::new()
        .route("/", get(game::list).post(game::create))
        .route(
            "/{id}",
            get(game::get_by_id)
                .put(game::update)
                .patch(game::partial_update)
                .delete(game::delete),
        )
        .nest("/{game_id}/characters", character_routes)
}
