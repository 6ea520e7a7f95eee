//! Route definitions for the `/regions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::regions;
use crate::state::AppState;

/// Routes mounted at `/regions`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(regions::list).post(regions::create))
        .route(
            "/{id}",
            get(regions::get_by_id)
                .put(regions::update)
                .delete(regions::delete),
        )
}
