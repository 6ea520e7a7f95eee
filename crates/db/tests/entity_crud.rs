//! Integration tests for repository CRUD, constraints and read projections.

use chrono::{Duration, Utc};
use craftadmin_core::catalog::ItemType;
use craftadmin_core::ledger::PurchaseTarget;
use craftadmin_db::models::catalog::{CreateItem, UpdateItem};
use craftadmin_db::models::player::NewPlayer;
use craftadmin_db::models::region::{CreateRegion, UpdateRegion};
use craftadmin_db::repositories::{
    GameModeRepo, ItemRepo, LedgerRepo, PlayerRepo, PurchaseRepo, RegionRepo, StatsRepo,
};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn game_mode(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO game_modes (name) VALUES (?1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn player(
    pool: &SqlitePool,
    code: &str,
    experience_points: i64,
    game_mode_id: i64,
    region_id: Option<i64>,
) -> i64 {
    let email = format!("{}@example.com", code.to_lowercase());
    PlayerRepo::create(
        pool,
        &NewPlayer {
            code,
            email: &email,
            password_hash: "1.c2FsdA==.a2V5",
            health: 100,
            food: 100,
            experience_points,
            game_mode_id,
            region_id,
        },
    )
    .await
    .unwrap()
    .id
}

fn new_item(name: &str, value: i64, item_type: ItemType) -> CreateItem {
    CreateItem {
        name: name.to_string(),
        image: None,
        value,
        item_type,
    }
}

fn new_region(name: &str) -> CreateRegion {
    CreateRegion {
        name: name.to_string(),
        description: None,
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_passes(pool: SqlitePool) {
    craftadmin_db::health_check(&pool).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn seed_runs_once(pool: SqlitePool) {
    assert!(craftadmin_db::seed::seed_if_empty(&pool).await.unwrap());
    assert!(!craftadmin_db::seed::seed_if_empty(&pool).await.unwrap());

    let counts = StatsRepo::entity_counts(&pool).await.unwrap();
    assert_eq!(counts.player_count, 7);
    assert_eq!(counts.game_mode_count, 5);
    assert_eq!(counts.item_count, 7);
    assert_eq!(counts.purchase_count, 7);

    let player = PlayerRepo::find_by_email(&pool, "player1@minecraft.com")
        .await
        .unwrap()
        .unwrap();
    assert!(craftadmin_core::credentials::is_hashed_format(&player.password));
    assert!(craftadmin_core::credentials::verify_password(
        &player.password,
        craftadmin_db::seed::SAMPLE_PASSWORD
    ));
}

// ---------------------------------------------------------------------------
// Regions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn region_crud(pool: SqlitePool) {
    let region = RegionRepo::create(&pool, &new_region("Overworld"))
        .await
        .unwrap();
    assert_eq!(region.name, "Overworld");

    assert!(RegionRepo::name_exists(&pool, "Overworld", None).await.unwrap());
    assert!(!RegionRepo::name_exists(&pool, "Overworld", Some(region.id))
        .await
        .unwrap());

    let updated = RegionRepo::update(
        &pool,
        region.id,
        &UpdateRegion {
            name: "Nether".to_string(),
            description: Some("Hot".to_string()),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.name, "Nether");
    assert_eq!(updated.description.as_deref(), Some("Hot"));

    assert!(RegionRepo::update(&pool, 999, &UpdateRegion::default())
        .await
        .unwrap()
        .is_none());

    assert!(RegionRepo::delete(&pool, region.id).await.unwrap());
    assert!(!RegionRepo::delete(&pool, region.id).await.unwrap());
    assert!(RegionRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_region_name_is_unique_violation(pool: SqlitePool) {
    RegionRepo::create(&pool, &new_region("End")).await.unwrap();
    let err = RegionRepo::create(&pool, &new_region("End"))
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err), "expected unique violation, got {err}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_region_detaches_players(pool: SqlitePool) {
    let mode = game_mode(&pool, "Survival").await;
    let region = RegionRepo::create(&pool, &new_region("Overworld"))
        .await
        .unwrap();
    let player_id = player(&pool, "P1", 0, mode, Some(region.id)).await;

    let details = PlayerRepo::find_details_by_id(&pool, player_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(details.region.unwrap().name, "Overworld");

    RegionRepo::delete(&pool, region.id).await.unwrap();

    let details = PlayerRepo::find_details_by_id(&pool, player_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(details.player.region_id, None);
    assert!(details.region.is_none());
    assert_eq!(details.game_mode.unwrap().name, "Survival");
}

// ---------------------------------------------------------------------------
// Players and game modes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_player_code_and_email_are_rejected(pool: SqlitePool) {
    let mode = game_mode(&pool, "Survival").await;
    player(&pool, "P1", 0, mode, None).await;

    assert!(PlayerRepo::code_exists(&pool, "P1").await.unwrap());
    assert!(PlayerRepo::email_exists(&pool, "p1@example.com").await.unwrap());

    let err = PlayerRepo::create(
        &pool,
        &NewPlayer {
            code: "P1",
            email: "other@example.com",
            password_hash: "x",
            health: 100,
            food: 100,
            experience_points: 0,
            game_mode_id: mode,
            region_id: None,
        },
    )
    .await
    .unwrap_err();
    assert!(is_unique_violation(&err));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn game_mode_in_use_cannot_be_deleted(pool: SqlitePool) {
    let mode = game_mode(&pool, "Creative").await;
    player(&pool, "P1", 0, mode, None).await;

    let err = sqlx::query("DELETE FROM game_modes WHERE id = ?1")
        .bind(mode)
        .execute(&pool)
        .await
        .unwrap_err();
    assert!(is_foreign_key_violation(&err));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn registration_prefers_survival(pool: SqlitePool) {
    assert!(GameModeRepo::default_for_registration(&pool)
        .await
        .unwrap()
        .is_none());

    game_mode(&pool, "Creative").await;
    let fallback = GameModeRepo::default_for_registration(&pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fallback.name, "Creative");

    game_mode(&pool, "Survival").await;
    let preferred = GameModeRepo::default_for_registration(&pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(preferred.name, "Survival");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn players_by_game_mode_ignores_case(pool: SqlitePool) {
    let survival = game_mode(&pool, "Survival").await;
    let creative = game_mode(&pool, "Creative").await;
    player(&pool, "P1", 0, survival, None).await;
    player(&pool, "P2", 0, creative, None).await;
    player(&pool, "P3", 0, survival, None).await;

    let found = PlayerRepo::list_details_by_game_mode_name(&pool, "sUrViVaL")
        .await
        .unwrap();
    let codes: Vec<&str> = found.iter().map(|d| d.player.code.as_str()).collect();
    assert_eq!(codes, ["P1", "P3"]);

    assert!(PlayerRepo::list_details_by_game_mode_name(&pool, "Hardcore")
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn password_update_and_legacy_upgrade(pool: SqlitePool) {
    let mode = game_mode(&pool, "Survival").await;
    let player_id = player(&pool, "P1", 0, mode, None).await;

    assert!(PlayerRepo::update_password(&pool, player_id, "plain")
        .await
        .unwrap());
    assert!(!PlayerRepo::update_password(&pool, 999, "plain").await.unwrap());

    // Upgrade only applies while the stored value is still the verified one.
    assert!(!PlayerRepo::upgrade_legacy_password(&pool, player_id, "stale", "1.a.b")
        .await
        .unwrap());
    assert!(PlayerRepo::upgrade_legacy_password(&pool, player_id, "plain", "1.a.b")
        .await
        .unwrap());

    let stored = PlayerRepo::find_by_id(&pool, player_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.password, "1.a.b");
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn item_partial_update_keeps_other_fields(pool: SqlitePool) {
    let item = ItemRepo::create(&pool, &new_item("Sword", 100, ItemType::Weapon))
        .await
        .unwrap();

    let updated = ItemRepo::update(
        &pool,
        item.id,
        &UpdateItem {
            value: Some(250),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.value, 250);
    assert_eq!(updated.name, "Sword");
    assert_eq!(updated.item_type, ItemType::Weapon);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn purchased_item_cannot_be_deleted(pool: SqlitePool) {
    let mode = game_mode(&pool, "Survival").await;
    let player_id = player(&pool, "P1", 500, mode, None).await;
    let item = ItemRepo::create(&pool, &new_item("Sword", 100, ItemType::Weapon))
        .await
        .unwrap();
    LedgerRepo::purchase(&pool, player_id, PurchaseTarget::Item(item.id))
        .await
        .unwrap();

    let err = ItemRepo::delete(&pool, item.id).await.unwrap_err();
    assert!(is_foreign_key_violation(&err));

    let unused = ItemRepo::create(&pool, &new_item("Apple", 10, ItemType::Special))
        .await
        .unwrap();
    assert!(ItemRepo::delete(&pool, unused.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn purchase_without_target_violates_schema(pool: SqlitePool) {
    let mode = game_mode(&pool, "Survival").await;
    let player_id = player(&pool, "P1", 0, mode, None).await;

    let err = sqlx::query("INSERT INTO purchases (player_id, purchased_at) VALUES (?1, ?2)")
        .bind(player_id)
        .bind(Utc::now())
        .execute(&pool)
        .await
        .unwrap_err();
    assert!(matches!(err, sqlx::Error::Database(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn item_projections(pool: SqlitePool) {
    for (name, value, item_type) in [
        ("Diamond Sword", 500, ItemType::Weapon),
        ("Wooden Sword", 100, ItemType::Weapon),
        ("Diamond Helmet", 450, ItemType::Clothing),
        ("Kim Cương Nhỏ", 50, ItemType::Special),
        ("Iron Pickaxe", 300, ItemType::Tool),
    ] {
        ItemRepo::create(&pool, &new_item(name, value, item_type))
            .await
            .unwrap();
    }

    // Strictly above the minimum.
    let weapons = ItemRepo::list_by_type_above_value(&pool, ItemType::Weapon, 100)
        .await
        .unwrap();
    let names: Vec<&str> = weapons.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Diamond Sword"]);

    // Case-insensitive substring, strictly below the maximum.
    let diamonds = ItemRepo::search_below_value(&pool, "DIAMOND", 500)
        .await
        .unwrap();
    let names: Vec<&str> = diamonds.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Diamond Helmet"]);

    let unicode = ItemRepo::search_below_value(&pool, "kim cương", 500)
        .await
        .unwrap();
    assert_eq!(unicode.len(), 1);

    let affordable = ItemRepo::list_affordable(&pool, 300).await.unwrap();
    let names: Vec<&str> = affordable.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Wooden Sword", "Kim Cương Nhỏ", "Iron Pickaxe"]);
}

// ---------------------------------------------------------------------------
// Purchases and stats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn purchases_by_player_are_chronological(pool: SqlitePool) {
    let mode = game_mode(&pool, "Survival").await;
    let player_id = player(&pool, "P1", 0, mode, None).await;
    let sword = ItemRepo::create(&pool, &new_item("Sword", 1, ItemType::Weapon))
        .await
        .unwrap();
    let apple = ItemRepo::create(&pool, &new_item("Apple", 1, ItemType::Special))
        .await
        .unwrap();

    let now = Utc::now();
    for (item_id, when) in [
        (sword.id, now),
        (apple.id, now - Duration::days(2)),
        (sword.id, now - Duration::days(1)),
    ] {
        sqlx::query(
            "INSERT INTO purchases (player_id, item_id, purchased_at) VALUES (?1, ?2, ?3)",
        )
        .bind(player_id)
        .bind(item_id)
        .bind(when)
        .execute(&pool)
        .await
        .unwrap();
    }

    let history = PurchaseRepo::list_details_by_player(&pool, player_id)
        .await
        .unwrap();
    let ids: Vec<i64> = history.iter().map(|p| p.purchase.id).collect();
    assert_eq!(ids, [2, 3, 1]);
    assert_eq!(history[0].item.as_ref().unwrap().name, "Apple");
    assert_eq!(history[0].player.as_ref().unwrap().player_code, "P1");
    assert!(history[0].vehicle.is_none());

    let newest_first = PurchaseRepo::list_details_newest_first(&pool).await.unwrap();
    let ids: Vec<i64> = newest_first.iter().map(|p| p.purchase.id).collect();
    assert_eq!(ids, [1, 3, 2]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn purchase_rankings(pool: SqlitePool) {
    let mode = game_mode(&pool, "Survival").await;
    let rich = player(&pool, "RICH", 1000, mode, None).await;
    let modest = player(&pool, "MODEST", 1000, mode, None).await;
    player(&pool, "IDLE", 1000, mode, None).await;
    let sword = ItemRepo::create(&pool, &new_item("Sword", 10, ItemType::Weapon))
        .await
        .unwrap();
    let apple = ItemRepo::create(&pool, &new_item("Apple", 10, ItemType::Special))
        .await
        .unwrap();
    ItemRepo::create(&pool, &new_item("Never Bought", 10, ItemType::Tool))
        .await
        .unwrap();

    for (player_id, item_id) in [(rich, apple.id), (rich, apple.id), (modest, sword.id)] {
        LedgerRepo::purchase(&pool, player_id, PurchaseTarget::Item(item_id))
            .await
            .unwrap();
    }

    let items = StatsRepo::most_purchased_items(&pool).await.unwrap();
    let ranked: Vec<(&str, i64)> = items
        .iter()
        .map(|r| (r.item.name.as_str(), r.purchase_count))
        .collect();
    assert_eq!(ranked, [("Apple", 2), ("Sword", 1)]);

    let players = StatsRepo::player_purchase_counts(&pool).await.unwrap();
    let ranked: Vec<(&str, i64)> = players
        .iter()
        .map(|r| (r.player.player.code.as_str(), r.purchase_count))
        .collect();
    assert_eq!(ranked, [("RICH", 2), ("MODEST", 1)]);
    assert_eq!(
        players[0].player.game_mode.as_ref().unwrap().name,
        "Survival"
    );
}

// ---------------------------------------------------------------------------
// Referential behaviour
// ---------------------------------------------------------------------------

async fn quest_and_monster(pool: &SqlitePool) -> (i64, i64) {
    let quest =
        sqlx::query_scalar("INSERT INTO quests (name, reward) VALUES ('Builder', 20) RETURNING id")
            .fetch_one(pool)
            .await
            .unwrap();
    let monster = sqlx::query_scalar(
        "INSERT INTO monsters (name, health, reward) VALUES ('Zombie', 20, 10) RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap();
    (quest, monster)
}

async fn row_count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn referenced_quest_and_monster_cannot_be_deleted(pool: SqlitePool) {
    let mode = game_mode(&pool, "Survival").await;
    let player_id = player(&pool, "P1", 0, mode, None).await;
    let (quest, monster) = quest_and_monster(&pool).await;
    LedgerRepo::complete_quest(&pool, player_id, quest).await.unwrap();
    LedgerRepo::record_monster_kill(&pool, player_id, monster)
        .await
        .unwrap();

    for (table, id) in [("quests", quest), ("monsters", monster)] {
        let err = sqlx::query(&format!("DELETE FROM {table} WHERE id = ?1"))
            .bind(id)
            .execute(&pool)
            .await
            .unwrap_err();
        assert!(is_foreign_key_violation(&err), "{table}: {err}");
    }
    assert_eq!(row_count(&pool, "quests").await, 1);
    assert_eq!(row_count(&pool, "monsters").await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_player_removes_ledger_history(pool: SqlitePool) {
    let mode = game_mode(&pool, "Survival").await;
    let player_id = player(&pool, "P1", 500, mode, None).await;
    let (quest, monster) = quest_and_monster(&pool).await;
    let item = ItemRepo::create(&pool, &new_item("Sword", 100, ItemType::Weapon))
        .await
        .unwrap();
    LedgerRepo::purchase(&pool, player_id, PurchaseTarget::Item(item.id))
        .await
        .unwrap();
    LedgerRepo::complete_quest(&pool, player_id, quest).await.unwrap();
    LedgerRepo::record_monster_kill(&pool, player_id, monster)
        .await
        .unwrap();

    sqlx::query("DELETE FROM players WHERE id = ?1")
        .bind(player_id)
        .execute(&pool)
        .await
        .unwrap();

    for table in ["purchases", "player_quests", "monster_kills"] {
        assert_eq!(row_count(&pool, table).await, 0, "{table}");
    }
    // Catalog rows are freed once the history is gone.
    assert!(ItemRepo::delete(&pool, item.id).await.unwrap());
}
