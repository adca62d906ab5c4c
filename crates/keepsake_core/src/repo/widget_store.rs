//! Typed widget-state store over the key-value repository.
//!
//! # Responsibility
//! - Own the fixed feature keys and their JSON encodings.
//! - Degrade every read to the feature's hard-coded default on missing
//!   key, parse failure, or storage error.
//!
//! # Invariants
//! - Read paths never surface errors to callers; a warn-level event is
//!   logged instead.
//! - Write paths persist the whole value for a key and propagate typed
//!   errors.

use crate::model::checkin::CheckinState;
use crate::model::guestbook::GuestbookEntry;
use crate::model::memory::MemoryItem;
use crate::model::settings::Settings;
use crate::repo::kv_repo::{KvRepository, RepoResult};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Store key for the settings singleton.
pub const SETTINGS_KEY: &str = "settings";
/// Store key for the check-in counter state.
pub const CHECKIN_STATE_KEY: &str = "checkinState";
/// Store key for the unlocked achievement id list.
pub const ACHIEVEMENTS_KEY: &str = "achievementsUnlocked";
/// Store key for the guestbook entry list.
pub const GUESTBOOK_KEY: &str = "guestbook";
/// Store key for the memory gallery list.
pub const MEMORIES_KEY: &str = "memories";

/// Typed facade over one key-value repository.
pub struct WidgetStore<R: KvRepository> {
    repo: R,
}

impl<R: KvRepository> WidgetStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn load_settings(&self) -> Settings {
        self.read_or_default(SETTINGS_KEY)
    }

    pub fn save_settings(&self, settings: &Settings) -> RepoResult<()> {
        self.write(SETTINGS_KEY, settings)
    }

    pub fn load_checkin(&self) -> CheckinState {
        self.read_or_default(CHECKIN_STATE_KEY)
    }

    pub fn save_checkin(&self, state: &CheckinState) -> RepoResult<()> {
        self.write(CHECKIN_STATE_KEY, state)
    }

    pub fn load_unlocked(&self) -> Vec<String> {
        self.read_or_default(ACHIEVEMENTS_KEY)
    }

    pub fn save_unlocked(&self, unlocked: &[String]) -> RepoResult<()> {
        self.write(ACHIEVEMENTS_KEY, unlocked)
    }

    pub fn load_guestbook(&self) -> Vec<GuestbookEntry> {
        self.read_or_default(GUESTBOOK_KEY)
    }

    pub fn save_guestbook(&self, entries: &[GuestbookEntry]) -> RepoResult<()> {
        self.write(GUESTBOOK_KEY, entries)
    }

    pub fn load_memories(&self) -> Vec<MemoryItem> {
        self.read_or_default(MEMORIES_KEY)
    }

    pub fn save_memories(&self, items: &[MemoryItem]) -> RepoResult<()> {
        self.write(MEMORIES_KEY, items)
    }

    /// Silent-default read: any failure yields `T::default()`.
    fn read_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let raw = match self.repo.get(key) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("event=store_read module=repo status=degraded key={key} error={err}");
                return T::default();
            }
        };

        match raw {
            None => T::default(),
            Some(text) => serde_json::from_str(&text).unwrap_or_else(|err| {
                warn!("event=store_read module=repo status=degraded key={key} error_code=parse_failed error={err}");
                T::default()
            }),
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> RepoResult<()> {
        let text = serde_json::to_string(value)?;
        self.repo.put(key, &text)
    }
}
