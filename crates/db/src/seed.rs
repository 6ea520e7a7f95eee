//! Sample catalog inserted into an empty database.
//!
//! Seeding runs once: it is skipped whenever `game_modes` already has rows.
//! Everything is inserted in a single transaction so a failed seed leaves
//! the database empty.

use chrono::{Duration, Utc};
use craftadmin_core::catalog::{ItemType, QuestStatus, VehicleType};
use craftadmin_core::credentials;
use craftadmin_core::types::DbId;
use sqlx::SqlitePool;

/// Password of every sample player.
pub const SAMPLE_PASSWORD: &str = "password123";

const GAME_MODES: &[(&str, &str)] = &[
    ("Survival", "Gather resources and stay alive"),
    ("Creative", "Build freely with unlimited resources"),
    ("Adventure", "Explore maps and complete quests"),
    ("Spectator", "Observe the world without interacting"),
    ("Hardcore", "Survival with a single life"),
];

const ITEMS: &[(&str, &str, i64, ItemType)] = &[
    ("Diamond Sword", "/images/diamond_sword.png", 500, ItemType::Weapon),
    ("Iron Pickaxe", "/images/iron_pickaxe.png", 300, ItemType::Tool),
    ("Leather Armor", "/images/leather_armor.png", 200, ItemType::Clothing),
    ("Golden Apple", "/images/golden_apple.png", 100, ItemType::Special),
    ("Enchanted Bow", "/images/enchanted_bow.png", 400, ItemType::Weapon),
    ("Diamond Helmet", "/images/diamond_helmet.png", 450, ItemType::Clothing),
    ("Netherite Axe", "/images/netherite_axe.png", 600, ItemType::Tool),
];

const VEHICLES: &[(&str, &str, i64, VehicleType)] = &[
    ("White Horse", "/images/white_horse.png", 250, VehicleType::Horse),
    ("Brown Horse", "/images/brown_horse.png", 250, VehicleType::Horse),
    ("Oak Boat", "/images/oak_boat.png", 150, VehicleType::Boat),
    ("Birch Boat", "/images/birch_boat.png", 150, VehicleType::Boat),
    ("Minecart", "/images/minecart.png", 200, VehicleType::Minecart),
    ("Chest Minecart", "/images/chest_minecart.png", 300, VehicleType::Minecart),
    ("Furnace Minecart", "/images/furnace_minecart.png", 350, VehicleType::Minecart),
];

const QUESTS: &[(&str, &str, i64)] = &[
    ("First Steps", "Collect your first 10 wood blocks", 50),
    ("Mining Master", "Mine 50 stone blocks", 100),
    ("Monster Hunter", "Defeat 5 monsters", 150),
    ("Builder", "Build a house", 200),
    ("Explorer", "Discover 3 new lands", 250),
    ("Craft Master", "Craft 10 different tools", 300),
    ("Dungeon Raider", "Clear a dungeon", 400),
];

/// (name, health, reward)
const MONSTERS: &[(&str, i64, i64)] = &[
    ("Zombie", 20, 10),
    ("Skeleton", 20, 15),
    ("Creeper", 20, 20),
    ("Spider", 16, 12),
    ("Enderman", 40, 50),
    ("Witch", 26, 30),
    ("Ender Dragon", 200, 1000),
];

/// (code, email, health, food, experience points, game mode index)
const PLAYERS: &[(&str, &str, i32, i32, i64, usize)] = &[
    ("PLAYER001", "player1@minecraft.com", 100, 100, 500, 0),
    ("PLAYER002", "player2@minecraft.com", 85, 90, 750, 1),
    ("PLAYER003", "player3@minecraft.com", 100, 100, 300, 0),
    ("PLAYER004", "player4@minecraft.com", 70, 80, 1200, 2),
    ("PLAYER005", "player5@minecraft.com", 100, 100, 200, 3),
    ("PLAYER006", "player6@minecraft.com", 95, 95, 600, 0),
    ("PLAYER007", "player7@minecraft.com", 100, 100, 150, 1),
];

enum SeedTarget {
    Item(usize),
    Vehicle(usize),
}

/// (player index, target, days ago)
const PURCHASES: &[(usize, SeedTarget, i64)] = &[
    (0, SeedTarget::Item(0), 0),
    (0, SeedTarget::Vehicle(0), 1),
    (1, SeedTarget::Item(1), 2),
    (2, SeedTarget::Vehicle(2), 3),
    (3, SeedTarget::Item(2), 1),
    (4, SeedTarget::Vehicle(4), 0),
    (5, SeedTarget::Item(3), 5),
];

/// (player index, quest index, completed this many days ago or in progress)
const PLAYER_QUESTS: &[(usize, usize, Option<i64>)] = &[
    (0, 0, Some(5)),
    (0, 1, Some(3)),
    (1, 2, Some(2)),
    (2, 0, None),
    (3, 3, Some(1)),
    (4, 4, None),
    (5, 1, Some(4)),
];

/// (player index, monster index, days ago)
const MONSTER_KILLS: &[(usize, usize, i64)] = &[
    (0, 0, 10),
    (0, 1, 8),
    (1, 2, 5),
    (2, 0, 7),
    (3, 3, 3),
    (4, 1, 6),
    (5, 4, 2),
];

/// Insert the sample data if the database has no game modes.
///
/// Returns `true` when data was inserted.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM game_modes")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        tracing::debug!(game_modes = existing, "Database already populated, skipping seed");
        return Ok(false);
    }

    // Sample accounts share one credential; hashing once keeps startup fast.
    let password_hash = credentials::hash_password(SAMPLE_PASSWORD);

    let mut tx = pool.begin().await?;

    let mut game_mode_ids = Vec::with_capacity(GAME_MODES.len());
    for (name, description) in GAME_MODES {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO game_modes (name, description) VALUES (?1, ?2) RETURNING id",
        )
        .bind(*name)
        .bind(*description)
        .fetch_one(&mut *tx)
        .await?;
        game_mode_ids.push(id);
    }

    let mut item_ids = Vec::with_capacity(ITEMS.len());
    for (name, image, value, item_type) in ITEMS {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO items (name, image, value, item_type) VALUES (?1, ?2, ?3, ?4) \
             RETURNING id",
        )
        .bind(*name)
        .bind(*image)
        .bind(*value)
        .bind(item_type.id())
        .fetch_one(&mut *tx)
        .await?;
        item_ids.push(id);
    }

    let mut vehicle_ids = Vec::with_capacity(VEHICLES.len());
    for (name, image, value, vehicle_type) in VEHICLES {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO vehicles (name, image, value, vehicle_type) VALUES (?1, ?2, ?3, ?4) \
             RETURNING id",
        )
        .bind(*name)
        .bind(*image)
        .bind(*value)
        .bind(vehicle_type.id())
        .fetch_one(&mut *tx)
        .await?;
        vehicle_ids.push(id);
    }

    let mut quest_ids = Vec::with_capacity(QUESTS.len());
    for (name, description, reward) in QUESTS {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO quests (name, description, reward) VALUES (?1, ?2, ?3) RETURNING id",
        )
        .bind(*name)
        .bind(*description)
        .bind(*reward)
        .fetch_one(&mut *tx)
        .await?;
        quest_ids.push(id);
    }

    let mut monster_ids = Vec::with_capacity(MONSTERS.len());
    for (name, health, reward) in MONSTERS {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO monsters (name, health, reward) VALUES (?1, ?2, ?3) RETURNING id",
        )
        .bind(*name)
        .bind(*health)
        .bind(*reward)
        .fetch_one(&mut *tx)
        .await?;
        monster_ids.push(id);
    }

    let mut player_ids = Vec::with_capacity(PLAYERS.len());
    for (code, email, health, food, experience_points, mode) in PLAYERS {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO players \
                (code, email, password, health, food, experience_points, game_mode_id) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
             RETURNING id",
        )
        .bind(*code)
        .bind(*email)
        .bind(&password_hash)
        .bind(*health)
        .bind(*food)
        .bind(*experience_points)
        .bind(game_mode_ids[*mode])
        .fetch_one(&mut *tx)
        .await?;
        player_ids.push(id);
    }

    let now = Utc::now();

    for (player, target, days_ago) in PURCHASES {
        let (item_id, vehicle_id) = match target {
            SeedTarget::Item(i) => (Some(item_ids[*i]), None),
            SeedTarget::Vehicle(v) => (None, Some(vehicle_ids[*v])),
        };
        sqlx::query(
            "INSERT INTO purchases (player_id, item_id, vehicle_id, purchased_at) \
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(player_ids[*player])
        .bind(item_id)
        .bind(vehicle_id)
        .bind(now - Duration::days(*days_ago))
        .execute(&mut *tx)
        .await?;
    }

    for (player, quest, completed_days_ago) in PLAYER_QUESTS {
        let status = match completed_days_ago {
            Some(_) => QuestStatus::Completed,
            None => QuestStatus::InProgress,
        };
        sqlx::query(
            "INSERT INTO player_quests (player_id, quest_id, status, completed_at) \
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(player_ids[*player])
        .bind(quest_ids[*quest])
        .bind(status.id())
        .bind(completed_days_ago.map(|days| now - Duration::days(days)))
        .execute(&mut *tx)
        .await?;
    }

    for (player, monster, days_ago) in MONSTER_KILLS {
        sqlx::query(
            "INSERT INTO monster_kills (player_id, monster_id, killed_at) VALUES (?1, ?2, ?3)",
        )
        .bind(player_ids[*player])
        .bind(monster_ids[*monster])
        .bind(now - Duration::days(*days_ago))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        game_modes = game_mode_ids.len(),
        items = item_ids.len(),
        vehicles = vehicle_ids.len(),
        quests = quest_ids.len(),
        monsters = monster_ids.len(),
        players = player_ids.len(),
        "Seeded sample data",
    );
    Ok(true)
}
