pub mod admin;
pub mod auth;
pub mod catalog;
pub mod game;
pub mod health;
pub mod ledger;
pub mod players;
pub mod regions;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/users                                      list players (public)
/// /auth/register                                   register (public)
/// /auth/login                                      player login (public)
///
/// /regions                                         list, create
/// /regions/{id}                                    get, update, delete
///
/// /players                                         list, create
/// /players/{id}                                    get
///
/// /items, /vehicles, /quests, /monsters, /game-modes   catalog lists
/// /dashboard                                       every list plus ledger history
///
/// /game/resources                                  game modes + catalog
/// /game/players/by-gamemode?gameModeName=          players in a game mode
/// /game/players/purchase-count                     purchases per player
/// /game/players/update-password                    own or admin token
/// /game/items                                      create item
/// /game/items/by-type?type=&minValue=              items above a value
/// /game/items/search?keyword=&maxValue=            items by name below a value
/// /game/items/affordable?playerId=                 items within a balance
/// /game/items/most-purchased                       purchase counts per item
/// /game/purchases/by-player?playerId=              a player's purchases
///
/// /purchases                                       spend experience points
/// /quests/complete                                 complete a quest
/// /monster-kills                                   record a kill
///
/// /admin/login                                     admin login (public)
/// /admin/stats, /admin/players, /admin/game-modes, /admin/purchases
/// /admin/items, /admin/items/{id}                  item CRUD
/// /admin/vehicles, /admin/vehicles/{id}            vehicle CRUD
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/regions", regions::router())
        .nest("/players", players::router())
        .nest("/game", game::router())
        .nest("/admin", admin::router())
        .merge(catalog::router())
        .merge(ledger::router())
        .route("/dashboard", get(handlers::dashboard::get))
}
