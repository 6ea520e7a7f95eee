//! Read-only catalog lists, merged at the `/api` root.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// ```text
/// GET /items       -> list_items
/// GET /vehicles    -> list_vehicles
/// GET /quests      -> list_quests
/// GET /monsters    -> list_monsters
/// GET /game-modes  -> list_game_modes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(catalog::list_items))
        .route("/vehicles", get(catalog::list_vehicles))
        .route("/quests", get(catalog::list_quests))
        .route("/monsters", get(catalog::list_monsters))
        .route("/game-modes", get(catalog::list_game_modes))
}
