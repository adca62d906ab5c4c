//! Achievement registry use-case service.
//!
//! # Responsibility
//! - Apply idempotent unlocks against the persisted unlocked list.
//! - Build the achievement-list render effect in catalog order.
//!
//! # Invariants
//! - Service APIs never bypass the pure catalog/unlock rules in
//!   `model::achievement`.
//! - Unlock signals for ids outside the catalog are silently dropped.

use crate::model::achievement::{self, ACHIEVEMENT_CATALOG};
use crate::render::{AchievementView, RenderEffect};
use crate::repo::kv_repo::{KvRepository, RepoResult};
use crate::repo::widget_store::WidgetStore;
use log::info;

/// Outcome of one unlock attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct UnlockReport {
    /// Whether the unlocked set grew.
    pub changed: bool,
    /// Refreshed achievement list for the view.
    pub effects: Vec<RenderEffect>,
}

/// Use-case service for the achievement registry.
pub struct AchievementService<R: KvRepository> {
    store: WidgetStore<R>,
}

impl<R: KvRepository> AchievementService<R> {
    pub fn new(store: WidgetStore<R>) -> Self {
        Self { store }
    }

    /// Unlocks `id` if it names a catalog entry not yet unlocked.
    ///
    /// Idempotent: repeating the call reports `changed = false` and leaves
    /// the stored list untouched.
    pub fn unlock(&self, id: &str) -> RepoResult<UnlockReport> {
        let changed = unlock_into_store(&self.store, id)?;
        Ok(UnlockReport {
            changed,
            effects: vec![list_effect(&self.store.load_unlocked())],
        })
    }

    /// Returns whether `id` has been unlocked.
    pub fn is_unlocked(&self, id: &str) -> bool {
        achievement::is_unlocked(&self.store.load_unlocked(), id)
    }

    /// Achievement list render effect, every catalog entry in order.
    pub fn render_list(&self) -> RenderEffect {
        list_effect(&self.store.load_unlocked())
    }
}

/// Applies one unlock against the store shared by all widget services.
///
/// Returns whether the persisted list grew. Used by the check-in,
/// guestbook, memory, and winter-mode paths that signal unlocks.
pub(crate) fn unlock_into_store<R: KvRepository>(
    store: &WidgetStore<R>,
    id: &str,
) -> RepoResult<bool> {
    let unlocked = store.load_unlocked();
    match achievement::unlock(&unlocked, id) {
        Some(next) => {
            store.save_unlocked(&next)?;
            info!("event=achievement_unlock module=service status=ok id={id}");
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Builds the full-catalog list view against an unlocked id list.
pub(crate) fn list_effect(unlocked: &[String]) -> RenderEffect {
    let views = ACHIEVEMENT_CATALOG
        .iter()
        .map(|def| AchievementView {
            id: def.id,
            name: def.name,
            description: def.description,
            unlocked: achievement::is_unlocked(unlocked, def.id),
        })
        .collect();
    RenderEffect::AchievementList(views)
}
