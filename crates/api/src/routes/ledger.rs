//! Ledger mutations, merged at the `/api` root.

use axum::routing::post;
use axum::Router;

use crate::handlers::ledger;
use crate::state::AppState;

/// ```text
/// POST /purchases        -> purchase
/// POST /quests/complete  -> complete_quest
/// POST /monster-kills    -> record_monster_kill
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/purchases", post(ledger::purchase))
        .route("/quests/complete", post(ledger::complete_quest))
        .route("/monster-kills", post(ledger::record_monster_kill))
}
