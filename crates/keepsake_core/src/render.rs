//! Render-effect descriptions returned by services.
//!
//! # Responsibility
//! - Describe view updates as plain data for any host to interpret.
//!
//! # Invariants
//! - Effects carry no storage handles; applying one must not require
//!   touching the store again.

use crate::model::guestbook::GuestbookEntry;
use crate::model::memory::MemoryItem;

/// Settings-panel control identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingToggle {
    WinterMode,
    AutoMusic,
    ShowCursor,
}

/// One row of the achievement list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementView {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

/// A single view update a host should apply.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEffect {
    /// Replace the check-in message text.
    CheckinMessage(String),
    /// Replace the check-in progress line (`completed/goal` days).
    CheckinProgress { completed: u32, goal: u32 },
    /// Re-render the achievement list in catalog order.
    AchievementList(Vec<AchievementView>),
    /// Re-render the guestbook in insertion order.
    GuestbookList(Vec<GuestbookEntry>),
    /// Re-render the memory gallery in insertion order.
    MemoryGallery(Vec<MemoryItem>),
    /// Toggle the winter-mode class on the site body.
    WinterModeClass(bool),
    /// Sync one settings-panel toggle control.
    ToggleControl { control: SettingToggle, value: bool },
    /// Show or hide the custom cursor.
    CursorVisible(bool),
    /// Pause background music (emitted with `false` when auto-music is
    /// off at load; playback is never force-started).
    MusicAutoplay(bool),
}
