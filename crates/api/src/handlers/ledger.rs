//! Handlers that move experience points: purchases, quest completion and
//! monster kills. Each call is one ledger transaction.
//!
//! The caller must hold the player's own token or an admin token.

use axum::extract::State;
use craftadmin_core::error::CoreError;
use craftadmin_core::ledger::PurchaseTarget;
use craftadmin_core::types::DbId;
use craftadmin_db::models::monster_kill::{CreateMonsterKill, MonsterKillReceipt};
use craftadmin_db::models::player_quest::{CompleteQuest, QuestCompletion};
use craftadmin_db::models::purchase::{CreatePurchase, PurchaseReceipt};
use craftadmin_db::repositories::LedgerRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::middleware::auth::AuthUser;
use crate::response::{ApiResponse, Envelope};
use crate::state::AppState;

fn ensure_owner(user: &AuthUser, player_id: DbId) -> AppResult<()> {
    if user.can_act_for(player_id) {
        return Ok(());
    }
    tracing::warn!(
        user_id = user.user_id,
        player_id,
        "Rejected ledger call for another player"
    );
    Err(AppError::Core(CoreError::Forbidden(
        "You can only act for your own player".into(),
    )))
}

/// POST /api/purchases
pub async fn purchase(
    State(state): State<AppState>,
    user: AuthUser,
    ApiJson(input): ApiJson<CreatePurchase>,
) -> AppResult<Envelope<PurchaseReceipt>> {
    ensure_owner(&user, input.player_id)?;
    let target = PurchaseTarget::from_ids(input.item_id, input.vehicle_id)?;
    let receipt = LedgerRepo::purchase(&state.pool, input.player_id, target).await?;
    Ok(ApiResponse::ok_with_message("Purchase successful", receipt))
}

/// POST /api/quests/complete
///
/// Completing an already completed quest succeeds with no reward.
pub async fn complete_quest(
    State(state): State<AppState>,
    user: AuthUser,
    ApiJson(input): ApiJson<CompleteQuest>,
) -> AppResult<Envelope<QuestCompletion>> {
    ensure_owner(&user, input.player_id)?;
    let completion = LedgerRepo::complete_quest(&state.pool, input.player_id, input.quest_id).await?;
    Ok(ApiResponse::ok_with_message(
        "Quest completed successfully",
        completion,
    ))
}

/// POST /api/monster-kills
pub async fn record_monster_kill(
    State(state): State<AppState>,
    user: AuthUser,
    ApiJson(input): ApiJson<CreateMonsterKill>,
) -> AppResult<Envelope<MonsterKillReceipt>> {
    ensure_owner(&user, input.player_id)?;
    let receipt =
        LedgerRepo::record_monster_kill(&state.pool, input.player_id, input.monster_id).await?;
    Ok(ApiResponse::ok_with_message(
        "Monster killed successfully",
        receipt,
    ))
}
