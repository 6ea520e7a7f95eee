//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` create/update DTOs where the entity is writable
//! - Named projection structs for joined reads
//!
//! JSON field names are camelCase and entity ids are exposed as
//! `<entity>Id` (`playerId`, `itemId`).

pub mod catalog;
pub mod game_mode;
pub mod monster_kill;
pub mod player;
pub mod player_quest;
pub mod purchase;
pub mod region;
pub mod stats;
