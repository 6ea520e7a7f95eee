//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument. `LedgerRepo` owns the only
//! multi-statement balance transactions.

pub mod game_mode_repo;
pub mod item_repo;
pub mod ledger_repo;
pub mod monster_kill_repo;
pub mod monster_repo;
pub mod player_quest_repo;
pub mod player_repo;
pub mod purchase_repo;
pub mod quest_repo;
pub mod region_repo;
pub mod stats_repo;
pub mod vehicle_repo;

pub use game_mode_repo::GameModeRepo;
pub use item_repo::ItemRepo;
pub use ledger_repo::{LedgerError, LedgerRepo};
pub use monster_kill_repo::MonsterKillRepo;
pub use monster_repo::MonsterRepo;
pub use player_quest_repo::PlayerQuestRepo;
pub use player_repo::PlayerRepo;
pub use purchase_repo::PurchaseRepo;
pub use quest_repo::QuestRepo;
pub use region_repo::RegionRepo;
pub use stats_repo::StatsRepo;
pub use vehicle_repo::VehicleRepo;
