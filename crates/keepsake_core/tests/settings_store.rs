use keepsake_core::db::open_db_in_memory;
use keepsake_core::{
    AchievementService, CheckinService, KvRepository, RenderEffect, SettingToggle, Settings,
    SettingsService, SqliteKvRepository, WidgetStore, CHECKIN_GOAL_DAYS,
};

#[test]
fn defaults_apply_on_a_fresh_store() {
    let conn = open_db_in_memory().unwrap();
    let service = SettingsService::new(WidgetStore::new(SqliteKvRepository::new(&conn)));

    assert_eq!(service.current(), Settings::default());
}

#[test]
fn changes_overwrite_the_persisted_singleton() {
    let conn = open_db_in_memory().unwrap();
    let service = SettingsService::new(WidgetStore::new(SqliteKvRepository::new(&conn)));

    service.set_winter_mode(true).unwrap();
    service.set_auto_music(false).unwrap();

    let raw = SqliteKvRepository::new(&conn)
        .get("settings")
        .unwrap()
        .expect("settings should be persisted");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["winterMode"], true);
    assert_eq!(value["autoMusic"], false);
    assert_eq!(value["showCursor"], true);
}

#[test]
fn parse_garbage_degrades_to_defaults() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteKvRepository::new(&conn);
    repo.put("settings", "not json at all").unwrap();
    repo.put("checkinState", "{\"day\": \"NaN\"}").unwrap();

    let settings = SettingsService::new(WidgetStore::new(SqliteKvRepository::new(&conn)));
    assert_eq!(settings.current(), Settings::default());

    let checkin = CheckinService::new(WidgetStore::new(SqliteKvRepository::new(&conn)));
    assert!(checkin.status().contains(&RenderEffect::CheckinProgress {
        completed: 0,
        goal: CHECKIN_GOAL_DAYS,
    }));
}

#[test]
fn winter_button_unlocks_but_panel_toggle_does_not() {
    let conn = open_db_in_memory().unwrap();
    let service = SettingsService::new(WidgetStore::new(SqliteKvRepository::new(&conn)));
    let achievements = AchievementService::new(WidgetStore::new(SqliteKvRepository::new(&conn)));

    service.set_winter_mode(true).unwrap();
    service.set_winter_mode(false).unwrap();
    assert!(!achievements.is_unlocked("winter_mode"));

    let report = service.toggle_winter_button().unwrap();
    assert!(report.enabled);
    assert!(achievements.is_unlocked("winter_mode"));

    // Toggling back keeps the achievement (the set never shrinks).
    let report = service.toggle_winter_button().unwrap();
    assert!(!report.enabled);
    assert!(achievements.is_unlocked("winter_mode"));
}

#[test]
fn apply_on_load_replays_stored_settings() {
    let conn = open_db_in_memory().unwrap();
    let service = SettingsService::new(WidgetStore::new(SqliteKvRepository::new(&conn)));

    let effects = service.apply_on_load();
    assert!(effects.contains(&RenderEffect::WinterModeClass(false)));
    assert!(effects.contains(&RenderEffect::CursorVisible(true)));
    assert!(!effects.contains(&RenderEffect::MusicAutoplay(false)));

    service.set_auto_music(false).unwrap();
    service.set_winter_mode(true).unwrap();

    let effects = service.apply_on_load();
    assert!(effects.contains(&RenderEffect::WinterModeClass(true)));
    assert!(effects.contains(&RenderEffect::ToggleControl {
        control: SettingToggle::AutoMusic,
        value: false,
    }));
    assert!(effects.contains(&RenderEffect::MusicAutoplay(false)));
}
