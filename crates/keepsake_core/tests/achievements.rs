use keepsake_core::db::open_db_in_memory;
use keepsake_core::{
    AchievementService, KvRepository, RenderEffect, SqliteKvRepository, WidgetStore,
    ACHIEVEMENT_CATALOG,
};

#[test]
fn unlocking_twice_stores_a_single_entry() {
    let conn = open_db_in_memory().unwrap();
    let service = AchievementService::new(WidgetStore::new(SqliteKvRepository::new(&conn)));

    let first = service.unlock("winter_mode").unwrap();
    assert!(first.changed);

    let second = service.unlock("winter_mode").unwrap();
    assert!(!second.changed);

    let raw = SqliteKvRepository::new(&conn)
        .get("achievementsUnlocked")
        .unwrap()
        .expect("unlocked list should be persisted");
    let stored: Vec<String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, vec!["winter_mode".to_string()]);
}

#[test]
fn unknown_ids_are_ignored() {
    let conn = open_db_in_memory().unwrap();
    let service = AchievementService::new(WidgetStore::new(SqliteKvRepository::new(&conn)));

    let report = service.unlock("checkin_2").unwrap();
    assert!(!report.changed);
    assert!(!service.is_unlocked("checkin_2"));

    assert!(SqliteKvRepository::new(&conn)
        .get("achievementsUnlocked")
        .unwrap()
        .is_none());
}

#[test]
fn list_renders_full_catalog_in_order() {
    let conn = open_db_in_memory().unwrap();
    let service = AchievementService::new(WidgetStore::new(SqliteKvRepository::new(&conn)));

    service.unlock("memory_first").unwrap();

    let RenderEffect::AchievementList(views) = service.render_list() else {
        panic!("expected achievement list effect");
    };
    assert_eq!(views.len(), ACHIEVEMENT_CATALOG.len());
    for (view, def) in views.iter().zip(ACHIEVEMENT_CATALOG) {
        assert_eq!(view.id, def.id);
        assert_eq!(view.name, def.name);
        assert_eq!(view.unlocked, def.id == "memory_first");
    }
}

#[test]
fn unlock_order_is_preserved() {
    let conn = open_db_in_memory().unwrap();
    let service = AchievementService::new(WidgetStore::new(SqliteKvRepository::new(&conn)));

    service.unlock("memory_first").unwrap();
    service.unlock("checkin_1").unwrap();
    service.unlock("winter_mode").unwrap();

    let raw = SqliteKvRepository::new(&conn)
        .get("achievementsUnlocked")
        .unwrap()
        .unwrap();
    let stored: Vec<String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, vec!["memory_first", "checkin_1", "winter_mode"]);
}
