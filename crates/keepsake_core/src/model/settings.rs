//! Site settings singleton.
//!
//! # Responsibility
//! - Define the persisted settings shape and its hard-coded defaults.
//!
//! # Invariants
//! - The singleton is overwritten whole on every change.
//! - Defaults apply whenever the stored value is missing or unreadable.

use serde::{Deserialize, Serialize};

/// User-facing toggles for the site.
///
/// Serialized layout matches the store's `settings` value:
/// `{"winterMode": false, "autoMusic": true, "showCursor": true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Winter visual theme on the site body.
    pub winter_mode: bool,
    /// Start background music automatically on load.
    pub auto_music: bool,
    /// Show the custom cursor and its follower.
    pub show_cursor: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            winter_mode: false,
            auto_music: true,
            show_cursor: true,
        }
    }
}
