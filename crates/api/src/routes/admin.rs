//! Route definitions for the `/admin` surface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. All but `/login` require an admin token.
///
/// ```text
/// POST   /login           -> login
/// GET    /stats           -> stats
/// GET    /players         -> players
/// GET    /game-modes      -> game_modes
/// GET    /purchases       -> purchases
///
/// GET    /items           -> list_items
/// POST   /items           -> create_item
/// GET    /items/{id}      -> get_item
/// PUT    /items/{id}      -> update_item
/// DELETE /items/{id}      -> delete_item
///
/// GET    /vehicles        -> list_vehicles
/// POST   /vehicles        -> create_vehicle
/// GET    /vehicles/{id}   -> get_vehicle
/// PUT    /vehicles/{id}   -> update_vehicle
/// DELETE /vehicles/{id}   -> delete_vehicle
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin::login))
        .route("/stats", get(admin::stats))
        .route("/players", get(admin::players))
        .route("/game-modes", get(admin::game_modes))
        .route("/purchases", get(admin::purchases))
        .route("/items", get(admin::list_items).post(admin::create_item))
        .route(
            "/items/{id}",
            get(admin::get_item)
                .put(admin::update_item)
                .delete(admin::delete_item),
        )
        .route(
            "/vehicles",
            get(admin::list_vehicles).post(admin::create_vehicle),
        )
        .route(
            "/vehicles/{id}",
            get(admin::get_vehicle)
                .put(admin::update_vehicle)
                .delete(admin::delete_vehicle),
        )
}
