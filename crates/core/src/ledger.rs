//! Experience-point ledger rules.
//!
//! The database layer owns the transaction; these functions decide what a
//! ledger operation is allowed to do given the rows it loaded.

use crate::catalog::QuestStatus;
use crate::error::CoreError;
use crate::types::DbId;

/// What a purchase buys. Exactly one of item or vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseTarget {
    Item(DbId),
    Vehicle(DbId),
}

impl PurchaseTarget {
    /// Build a target from the optional request ids.
    pub fn from_ids(item_id: Option<DbId>, vehicle_id: Option<DbId>) -> Result<Self, CoreError> {
        match (item_id, vehicle_id) {
            (Some(item_id), None) => Ok(Self::Item(item_id)),
            (None, Some(vehicle_id)) => Ok(Self::Vehicle(vehicle_id)),
            (None, None) => Err(CoreError::Validation(
                "Either ItemId or VehicleId must be provided".into(),
            )),
            (Some(_), Some(_)) => Err(CoreError::Validation(
                "Only one of ItemId or VehicleId may be provided".into(),
            )),
        }
    }

    /// Entity name used in not-found messages.
    pub fn entity(self) -> &'static str {
        match self {
            Self::Item(_) => "Item",
            Self::Vehicle(_) => "Vehicle",
        }
    }

    pub fn id(self) -> DbId {
        match self {
            Self::Item(id) | Self::Vehicle(id) => id,
        }
    }

    pub fn item_id(self) -> Option<DbId> {
        match self {
            Self::Item(id) => Some(id),
            Self::Vehicle(_) => None,
        }
    }

    pub fn vehicle_id(self) -> Option<DbId> {
        match self {
            Self::Vehicle(id) => Some(id),
            Self::Item(_) => None,
        }
    }

    /// The not-found error for this target.
    pub fn not_found(self) -> CoreError {
        CoreError::NotFound {
            entity: self.entity(),
            id: self.id(),
        }
    }
}

/// Balance after spending `cost`, or `InsufficientFunds`.
pub fn debit(balance: i64, cost: i64) -> Result<i64, CoreError> {
    if cost < 0 {
        return Err(CoreError::Validation("Cost must not be negative".into()));
    }
    if balance < cost {
        return Err(CoreError::InsufficientFunds { balance, cost });
    }
    Ok(balance - cost)
}

/// Balance after earning `reward`.
pub fn credit(balance: i64, reward: i64) -> Result<i64, CoreError> {
    if reward < 0 {
        return Err(CoreError::Validation("Reward must not be negative".into()));
    }
    balance
        .checked_add(reward)
        .ok_or_else(|| CoreError::Internal("Experience point balance overflow".into()))
}

/// How a quest-completion request changes the player-quest row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestTransition {
    /// No row yet: insert one already completed.
    Insert,
    /// Row in progress: mark it completed.
    Complete,
    /// Row already completed: nothing changes.
    AlreadyCompleted,
}

impl QuestTransition {
    /// Decide from the current row status, if a row exists.
    pub fn from_existing(existing: Option<QuestStatus>) -> Self {
        match existing {
            None => Self::Insert,
            Some(QuestStatus::InProgress) => Self::Complete,
            Some(QuestStatus::Completed) => Self::AlreadyCompleted,
        }
    }

    /// Reward credited by this transition.
    pub fn reward(self, quest_reward: i64) -> i64 {
        match self {
            Self::Insert | Self::Complete => quest_reward,
            Self::AlreadyCompleted => 0,
        }
    }
}
