//! The widget services run unchanged over the in-memory fallback backend.

use chrono::NaiveDate;
use keepsake_core::{
    AchievementService, CheckinOutcome, CheckinService, GuestbookService, InMemoryKvRepository,
    WidgetStore,
};

#[test]
fn services_share_state_through_one_in_memory_repo() {
    let repo = InMemoryKvRepository::new();
    let checkin = CheckinService::new(WidgetStore::new(&repo));
    let guestbook = GuestbookService::new(WidgetStore::new(&repo));
    let achievements = AchievementService::new(WidgetStore::new(&repo));

    let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
    let report = checkin.check_in(today).unwrap();
    assert!(matches!(report.outcome, CheckinOutcome::Advanced { day: 1, .. }));

    guestbook.add_entry("An", "hello").unwrap();

    assert!(achievements.is_unlocked("checkin_1"));
    assert!(achievements.is_unlocked("guestbook_first"));
    assert_eq!(guestbook.entries().len(), 1);
}

#[test]
fn state_is_process_local_per_repo() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();

    let first = InMemoryKvRepository::new();
    CheckinService::new(WidgetStore::new(&first))
        .check_in(today)
        .unwrap();

    let second = InMemoryKvRepository::new();
    let report = CheckinService::new(WidgetStore::new(&second))
        .check_in(today)
        .unwrap();
    assert!(matches!(report.outcome, CheckinOutcome::Advanced { day: 1, .. }));
}
