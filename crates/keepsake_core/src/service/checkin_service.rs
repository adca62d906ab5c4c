//! Daily check-in use-case service.
//!
//! # Responsibility
//! - Run the once-per-day counter transition and persist its result.
//! - Forward the `checkin_{day}` unlock signal to the registry.
//!
//! # Invariants
//! - Same-date repeats and post-completion attempts persist nothing.
//! - Returned effects always include message, progress, and the refreshed
//!   achievement list (the historical view updates all three together).

use crate::model::checkin::{
    self, CheckinOutcome, CHECKIN_GOAL_DAYS, CHECKIN_PROMPT_MESSAGE, COMPLETED_MESSAGE,
};
use crate::render::RenderEffect;
use crate::repo::kv_repo::{KvRepository, RepoResult};
use crate::repo::widget_store::WidgetStore;
use crate::service::achievement_service::{list_effect, unlock_into_store};
use chrono::NaiveDate;
use log::info;

/// Result of one check-in attempt, ready for a host to apply.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckinReport {
    pub outcome: CheckinOutcome,
    /// Catalog ids newly unlocked by this attempt (at most one).
    pub newly_unlocked: Vec<String>,
    pub effects: Vec<RenderEffect>,
}

/// Use-case service for the check-in tracker.
pub struct CheckinService<R: KvRepository> {
    store: WidgetStore<R>,
}

impl<R: KvRepository> CheckinService<R> {
    pub fn new(store: WidgetStore<R>) -> Self {
        Self { store }
    }

    /// Attempts one check-in for `today`.
    ///
    /// # Contract
    /// - Persists state only when the counter advances.
    /// - Signals `checkin_{day}`; the registry drops non-milestone days.
    pub fn check_in(&self, today: NaiveDate) -> RepoResult<CheckinReport> {
        let state = self.store.load_checkin();
        let (next, outcome) = checkin::check_in(&state, today);

        let mut newly_unlocked = Vec::new();
        if let CheckinOutcome::Advanced { day, unlock, .. } = &outcome {
            self.store.save_checkin(&next)?;
            if unlock_into_store(&self.store, unlock)? {
                newly_unlocked.push(unlock.clone());
            }
            info!("event=checkin module=service status=ok day={day}");
        } else {
            info!(
                "event=checkin module=service status=noop day={} reason={}",
                state.day,
                match &outcome {
                    CheckinOutcome::AlreadyCheckedIn => "already_checked_in",
                    _ => "completed",
                }
            );
        }

        let effects = vec![
            RenderEffect::CheckinMessage(outcome.message().to_string()),
            RenderEffect::CheckinProgress {
                completed: next.day,
                goal: CHECKIN_GOAL_DAYS,
            },
            list_effect(&self.store.load_unlocked()),
        ];

        Ok(CheckinReport {
            outcome,
            newly_unlocked,
            effects,
        })
    }

    /// View effects for the check-in panel without attempting a check-in.
    pub fn status(&self) -> Vec<RenderEffect> {
        let state = self.store.load_checkin();
        let message = if state.is_complete() {
            COMPLETED_MESSAGE
        } else {
            CHECKIN_PROMPT_MESSAGE
        };
        vec![
            RenderEffect::CheckinMessage(message.to_string()),
            RenderEffect::CheckinProgress {
                completed: state.day,
                goal: CHECKIN_GOAL_DAYS,
            },
        ]
    }
}
