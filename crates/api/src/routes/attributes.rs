//! Route definitions for the `/attributes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::attributes;
use crate::state::AppState;

/// Routes mounted at `/attributes`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> create
/// GET    /{id}     -> get_by_id
/// PUT    /{id}     -> update
/// PATCH  /{id}     -> partial_update
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(attributes::list).post(attributes::create))
        .route(
            "/{id}",
            get(attributes::get_by_id)
                .put(attributes::update)
                .patch(attributes::partial_update)
                .delete(attributes::delete),
        )
}
