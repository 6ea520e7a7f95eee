//! Route definitions for the `/game` queries.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::game;
use crate::state::AppState;

/// Routes mounted at `/game`.
///
/// ```text
/// GET  /resources                  -> resources
/// GET  /players/by-gamemode        -> players_by_game_mode
/// GET  /players/purchase-count     -> player_purchase_counts
/// POST /players/update-password    -> update_password (requires auth)
/// POST /items                      -> create_item
/// GET  /items/by-type              -> items_by_type
/// GET  /items/search               -> search_items
/// GET  /items/affordable           -> affordable_items
/// GET  /items/most-purchased       -> most_purchased_items
/// GET  /purchases/by-player        -> purchases_by_player
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/resources", get(game::resources))
        .route("/players/by-gamemode", get(game::players_by_game_mode))
        .route("/players/purchase-count", get(game::player_purchase_counts))
        .route("/players/update-password", post(game::update_password))
        .route("/items", post(game::create_item))
        .route("/items/by-type", get(game::items_by_type))
        .route("/items/search", get(game::search_items))
        .route("/items/affordable", get(game::affordable_items))
        .route("/items/most-purchased", get(game::most_purchased_items))
        .route("/purchases/by-player", get(game::purchases_by_player))
}
