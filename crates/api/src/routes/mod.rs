pub mod attributes;
pub mod game;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /games                                 list, create
/// /games/{id}                            get, update, patch, delete
/// /games/{game_id}/characters            list, create
/// /games/{game_id}/characters/{id}       get, update, patch, delete
///
/// /attributes                            list, create
/// /attributes/{id}                       get, update, patch, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Game routes (also nest game-scoped characters).
        .nest("/games", game::router())
        // Standalone attributes blocks.
        .nest("/attributes", attributes::router())
}
