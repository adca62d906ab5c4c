//! Settings panel and winter-mode use-case service.
//!
//! # Responsibility
//! - Overwrite the persisted singleton on every change and describe the
//!   resulting view updates.
//! - Replay stored settings as effects on load.
//!
//! # Invariants
//! - The winter *button* path unlocks `winter_mode`; the settings-panel
//!   toggle path does not.
//! - Playback is never force-started: the autoplay effect only pauses.

use crate::model::settings::Settings;
use crate::render::{RenderEffect, SettingToggle};
use crate::repo::kv_repo::{KvRepository, RepoResult};
use crate::repo::widget_store::WidgetStore;
use crate::service::achievement_service::{list_effect, unlock_into_store};

/// Result of the winter footer-button toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct WinterToggleReport {
    /// Winter mode state after the toggle.
    pub enabled: bool,
    pub effects: Vec<RenderEffect>,
}

/// Use-case service for settings and winter mode.
pub struct SettingsService<R: KvRepository> {
    store: WidgetStore<R>,
}

impl<R: KvRepository> SettingsService<R> {
    pub fn new(store: WidgetStore<R>) -> Self {
        Self { store }
    }

    /// Current settings (defaults when the store is unreadable).
    pub fn current(&self) -> Settings {
        self.store.load_settings()
    }

    /// Settings-panel winter toggle. Does not unlock anything.
    pub fn set_winter_mode(&self, enabled: bool) -> RepoResult<Vec<RenderEffect>> {
        let mut settings = self.store.load_settings();
        settings.winter_mode = enabled;
        self.store.save_settings(&settings)?;
        Ok(winter_effects(enabled))
    }

    pub fn set_auto_music(&self, enabled: bool) -> RepoResult<Vec<RenderEffect>> {
        let mut settings = self.store.load_settings();
        settings.auto_music = enabled;
        self.store.save_settings(&settings)?;
        Ok(vec![RenderEffect::ToggleControl {
            control: SettingToggle::AutoMusic,
            value: enabled,
        }])
    }

    pub fn set_show_cursor(&self, visible: bool) -> RepoResult<Vec<RenderEffect>> {
        let mut settings = self.store.load_settings();
        settings.show_cursor = visible;
        self.store.save_settings(&settings)?;
        Ok(cursor_effects(visible))
    }

    /// Winter footer-button path: flips the current value and unlocks the
    /// `winter_mode` achievement.
    pub fn toggle_winter_button(&self) -> RepoResult<WinterToggleReport> {
        let enabled = !self.store.load_settings().winter_mode;
        let mut effects = self.set_winter_mode(enabled)?;
        unlock_into_store(&self.store, "winter_mode")?;
        effects.push(list_effect(&self.store.load_unlocked()));
        Ok(WinterToggleReport { enabled, effects })
    }

    /// Effects bringing a fresh view in sync with stored settings.
    pub fn apply_on_load(&self) -> Vec<RenderEffect> {
        let settings = self.store.load_settings();
        let mut effects = winter_effects(settings.winter_mode);
        effects.push(RenderEffect::ToggleControl {
            control: SettingToggle::AutoMusic,
            value: settings.auto_music,
        });
        effects.extend(cursor_effects(settings.show_cursor));
        if !settings.auto_music {
            effects.push(RenderEffect::MusicAutoplay(false));
        }
        effects
    }
}

fn winter_effects(enabled: bool) -> Vec<RenderEffect> {
    vec![
        RenderEffect::WinterModeClass(enabled),
        RenderEffect::ToggleControl {
            control: SettingToggle::WinterMode,
            value: enabled,
        },
    ]
}

fn cursor_effects(visible: bool) -> Vec<RenderEffect> {
    vec![
        RenderEffect::CursorVisible(visible),
        RenderEffect::ToggleControl {
            control: SettingToggle::ShowCursor,
            value: visible,
        },
    ]
}
