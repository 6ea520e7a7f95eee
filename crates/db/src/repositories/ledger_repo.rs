//! Balance ledger: purchases, quest completions and monster kills.
//!
//! Each operation is one transaction. Its first statement is a no-op write
//! to the player row, which makes SQLite take the database write lock
//! before the balance is read. Concurrent ledger operations therefore
//! serialize (waiting up to the pool's busy timeout) instead of reading a
//! stale balance. Any early return drops the transaction, rolling it back.

use chrono::Utc;
use craftadmin_core::catalog::QuestStatus;
use craftadmin_core::error::CoreError;
use craftadmin_core::ledger::{self, PurchaseTarget, QuestTransition};
use craftadmin_core::types::DbId;
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::monster_kill::{MonsterKill, MonsterKillReceipt};
use crate::models::player_quest::{PlayerQuest, QuestCompletion};
use crate::models::purchase::{Purchase, PurchaseReceipt};
use crate::repositories::player_quest_repo::COLUMNS as PLAYER_QUEST_COLUMNS;

const PURCHASE_COLUMNS: &str = "id, player_id, item_id, vehicle_id, purchased_at";
const MONSTER_KILL_COLUMNS: &str = "id, player_id, monster_id, killed_at";

/// Failure of a ledger operation: a domain rule or the store itself.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub struct LedgerRepo;

impl LedgerRepo {
    /// Spend the player's experience points on one item or vehicle.
    ///
    /// Fails with `NotFound` for a missing player or target and
    /// `InsufficientFunds` when the balance is below the cost. Nothing is
    /// written on failure.
    pub async fn purchase(
        pool: &SqlitePool,
        player_id: DbId,
        target: PurchaseTarget,
    ) -> Result<PurchaseReceipt, LedgerError> {
        let mut tx = pool.begin().await?;

        let balance = lock_player(&mut *tx, player_id).await?;

        let cost_query = match target {
            PurchaseTarget::Item(_) => "SELECT value FROM items WHERE id = ?1",
            PurchaseTarget::Vehicle(_) => "SELECT value FROM vehicles WHERE id = ?1",
        };
        let cost = sqlx::query_scalar::<_, i64>(cost_query)
            .bind(target.id())
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| target.not_found())?;

        ledger::debit(balance, cost)?;

        let experience_points = sqlx::query_scalar::<_, i64>(
            "UPDATE players SET experience_points = experience_points - ?2 \
             WHERE id = ?1 AND experience_points >= ?2 \
             RETURNING experience_points",
        )
        .bind(player_id)
        .bind(cost)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(CoreError::InsufficientFunds { balance, cost })?;

        let query = format!(
            "INSERT INTO purchases (player_id, item_id, vehicle_id, purchased_at) \
             VALUES (?1, ?2, ?3, ?4) \
             RETURNING {PURCHASE_COLUMNS}"
        );
        let purchase = sqlx::query_as::<_, Purchase>(&query)
            .bind(player_id)
            .bind(target.item_id())
            .bind(target.vehicle_id())
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            player_id,
            purchase_id = purchase.id,
            target = target.entity(),
            target_id = target.id(),
            cost,
            balance = experience_points,
            "Purchase recorded",
        );

        Ok(PurchaseReceipt {
            purchase,
            cost,
            experience_points,
        })
    }

    /// Mark a quest completed for a player, crediting its reward the first
    /// time only. Completing an already-completed quest succeeds with a
    /// zero reward and changes nothing.
    pub async fn complete_quest(
        pool: &SqlitePool,
        player_id: DbId,
        quest_id: DbId,
    ) -> Result<QuestCompletion, LedgerError> {
        let mut tx = pool.begin().await?;

        let balance = lock_player(&mut *tx, player_id).await?;

        let quest_reward = sqlx::query_scalar::<_, i64>("SELECT reward FROM quests WHERE id = ?1")
            .bind(quest_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Quest",
                id: quest_id,
            })?;

        let query = format!(
            "SELECT {PLAYER_QUEST_COLUMNS} FROM player_quests WHERE player_id = ?1 AND quest_id = ?2"
        );
        let existing = sqlx::query_as::<_, PlayerQuest>(&query)
            .bind(player_id)
            .bind(quest_id)
            .fetch_optional(&mut *tx)
            .await?;

        let transition = QuestTransition::from_existing(existing.as_ref().map(|pq| pq.status));
        let now = Utc::now();

        let player_quest = match (transition, existing) {
            (QuestTransition::AlreadyCompleted, Some(existing)) => existing,
            (QuestTransition::Complete, Some(existing)) => {
                let query = format!(
                    "UPDATE player_quests SET status = ?2, completed_at = ?3 \
                     WHERE id = ?1 \
                     RETURNING {PLAYER_QUEST_COLUMNS}"
                );
                sqlx::query_as::<_, PlayerQuest>(&query)
                    .bind(existing.id)
                    .bind(QuestStatus::Completed.id())
                    .bind(now)
                    .fetch_one(&mut *tx)
                    .await?
            }
            _ => {
                let query = format!(
                    "INSERT INTO player_quests (player_id, quest_id, status, completed_at) \
                     VALUES (?1, ?2, ?3, ?4) \
                     RETURNING {PLAYER_QUEST_COLUMNS}"
                );
                sqlx::query_as::<_, PlayerQuest>(&query)
                    .bind(player_id)
                    .bind(quest_id)
                    .bind(QuestStatus::Completed.id())
                    .bind(now)
                    .fetch_one(&mut *tx)
                    .await?
            }
        };

        let reward_granted = transition.reward(quest_reward);
        let experience_points = credit_player(&mut *tx, player_id, balance, reward_granted).await?;

        tx.commit().await?;

        tracing::info!(
            player_id,
            quest_id,
            ?transition,
            reward_granted,
            balance = experience_points,
            "Quest completion processed",
        );

        Ok(QuestCompletion {
            player_quest,
            reward_granted,
            experience_points,
        })
    }

    /// Record a monster kill and credit the monster's reward. Every kill
    /// counts, including repeats.
    pub async fn record_monster_kill(
        pool: &SqlitePool,
        player_id: DbId,
        monster_id: DbId,
    ) -> Result<MonsterKillReceipt, LedgerError> {
        let mut tx = pool.begin().await?;

        let balance = lock_player(&mut *tx, player_id).await?;

        let reward = sqlx::query_scalar::<_, i64>("SELECT reward FROM monsters WHERE id = ?1")
            .bind(monster_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Monster",
                id: monster_id,
            })?;

        let query = format!(
            "INSERT INTO monster_kills (player_id, monster_id, killed_at) \
             VALUES (?1, ?2, ?3) \
             RETURNING {MONSTER_KILL_COLUMNS}"
        );
        let monster_kill = sqlx::query_as::<_, MonsterKill>(&query)
            .bind(player_id)
            .bind(monster_id)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await?;

        let experience_points = credit_player(&mut *tx, player_id, balance, reward).await?;

        tx.commit().await?;

        tracing::info!(
            player_id,
            monster_id,
            reward,
            balance = experience_points,
            "Monster kill recorded",
        );

        Ok(MonsterKillReceipt {
            monster_kill,
            reward_granted: reward,
            experience_points,
        })
    }
}

/// Take the write lock via the player row and return the current balance.
async fn lock_player(conn: &mut SqliteConnection, player_id: DbId) -> Result<i64, LedgerError> {
    sqlx::query_scalar::<_, i64>(
        "UPDATE players SET experience_points = experience_points \
         WHERE id = ?1 \
         RETURNING experience_points",
    )
    .bind(player_id)
    .fetch_optional(conn)
    .await?
    .ok_or_else(|| {
        CoreError::NotFound {
            entity: "Player",
            id: player_id,
        }
        .into()
    })
}

/// Add `reward` to the locked player's balance and return the new balance.
async fn credit_player(
    conn: &mut SqliteConnection,
    player_id: DbId,
    balance: i64,
    reward: i64,
) -> Result<i64, LedgerError> {
    let expected = ledger::credit(balance, reward)?;
    if reward == 0 {
        return Ok(expected);
    }
    let experience_points = sqlx::query_scalar::<_, i64>(
        "UPDATE players SET experience_points = experience_points + ?2 \
         WHERE id = ?1 \
         RETURNING experience_points",
    )
    .bind(player_id)
    .bind(reward)
    .fetch_one(conn)
    .await?;
    Ok(experience_points)
}
