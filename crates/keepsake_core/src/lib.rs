//! Core widget engine for a personal commemorative site.
//! This crate is the single source of truth for widget state invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::achievement::{
    checkin_achievement_id, AchievementDef, ACHIEVEMENT_CATALOG,
};
pub use model::checkin::{CheckinOutcome, CheckinState, CHECKIN_GOAL_DAYS};
pub use model::guestbook::{GuestbookEntry, GuestbookValidationError};
pub use model::memory::{mime_from_extension, MediaKind, MemoryItem};
pub use model::settings::Settings;
pub use render::{AchievementView, RenderEffect, SettingToggle};
pub use repo::kv_repo::{
    InMemoryKvRepository, KvRepository, RepoError, RepoResult, SqliteKvRepository,
};
pub use repo::widget_store::WidgetStore;
pub use service::achievement_service::{AchievementService, UnlockReport};
pub use service::checkin_service::{CheckinReport, CheckinService};
pub use service::guestbook_service::{GuestbookReport, GuestbookService, GuestbookServiceError};
pub use service::memory_service::{MemoryReport, MemoryService, MemoryUpload};
pub use service::settings_service::{SettingsService, WinterToggleReport};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
