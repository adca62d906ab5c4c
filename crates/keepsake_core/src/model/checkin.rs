//! Daily check-in state machine.
//!
//! # Responsibility
//! - Advance the daily counter at most once per calendar day.
//! - Map day indexes to the fixed 100-entry message table.
//! - Signal which achievement id a successful check-in unlocks.
//!
//! # Invariants
//! - `day` never decreases and never exceeds [`CHECKIN_GOAL_DAYS`].
//! - `last_date`, once set, is the calendar date of the most recent
//!   successful check-in.
//! - A second check-in on the same date is a no-op.

use crate::model::achievement::checkin_achievement_id;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Total number of daily messages; the counter caps here.
pub const CHECKIN_GOAL_DAYS: u32 = 100;

/// Shown when the user already checked in on the given date.
pub const ALREADY_CHECKED_IN_MESSAGE: &str = "You have already checked in today!";

/// Shown once all 100 days are complete.
pub const COMPLETED_MESSAGE: &str = "You have completed all 100 check-in days! 🎉";

/// Prompt shown before today's check-in has happened.
pub const CHECKIN_PROMPT_MESSAGE: &str = "Check in to receive today's message!";

static DAILY_MESSAGES: Lazy<Vec<String>> = Lazy::new(|| {
    (1..=CHECKIN_GOAL_DAYS)
        .map(|day| format!("Day {day}: enjoy the little things and keep smiling!"))
        .collect()
});

/// Persisted check-in state.
///
/// Serialized layout matches the store's historical `checkinState` value:
/// `{"day": 3, "lastDate": "2026-02-01"}` with `lastDate: null` before the
/// first check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinState {
    /// Number of completed check-in days, `0..=100`.
    pub day: u32,
    /// Calendar date of the most recent successful check-in.
    pub last_date: Option<NaiveDate>,
}

impl CheckinState {
    /// Returns whether all goal days are complete.
    pub fn is_complete(&self) -> bool {
        self.day >= CHECKIN_GOAL_DAYS
    }
}

/// Result of one check-in attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckinOutcome {
    /// `last_date` already equals today; nothing changed.
    AlreadyCheckedIn,
    /// Counter advanced to `day`; `unlock` is the signalled achievement id
    /// (`checkin_{day}`, filtered against the catalog by the registry).
    Advanced { day: u32, message: String, unlock: String },
    /// All 100 days were already complete; nothing changed.
    Completed,
}

impl CheckinOutcome {
    /// Message text a view should display for this outcome.
    pub fn message(&self) -> &str {
        match self {
            Self::AlreadyCheckedIn => ALREADY_CHECKED_IN_MESSAGE,
            Self::Advanced { message, .. } => message,
            Self::Completed => COMPLETED_MESSAGE,
        }
    }
}

/// Attempts one check-in for `today` and returns the next state.
///
/// # Contract
/// - Same-date repeat: returns `AlreadyCheckedIn`, state unchanged.
/// - `day < 100`: increments `day`, stamps `last_date = today`, returns the
///   1-based message for the new day and the `checkin_{day}` unlock signal.
/// - `day == 100`: returns `Completed`, state unchanged.
pub fn check_in(state: &CheckinState, today: NaiveDate) -> (CheckinState, CheckinOutcome) {
    if state.last_date == Some(today) {
        return (*state, CheckinOutcome::AlreadyCheckedIn);
    }

    if state.is_complete() {
        return (*state, CheckinOutcome::Completed);
    }

    let next = CheckinState {
        day: state.day + 1,
        last_date: Some(today),
    };
    let message = daily_message(next.day)
        .unwrap_or(COMPLETED_MESSAGE)
        .to_string();
    let outcome = CheckinOutcome::Advanced {
        day: next.day,
        message,
        unlock: checkin_achievement_id(next.day),
    };
    (next, outcome)
}

/// Returns the fixed message for a 1-based day index.
///
/// `None` outside `1..=100`.
pub fn daily_message(day: u32) -> Option<&'static str> {
    if day == 0 {
        return None;
    }
    DAILY_MESSAGES.get(day as usize - 1).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::{check_in, daily_message, CheckinOutcome, CheckinState, CHECKIN_GOAL_DAYS};
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .checked_add_days(chrono::Days::new(u64::from(day)))
            .unwrap()
    }

    #[test]
    fn first_check_in_advances_to_day_one() {
        let (next, outcome) = check_in(&CheckinState::default(), date(0));

        assert_eq!(next.day, 1);
        assert_eq!(next.last_date, Some(date(0)));
        match outcome {
            CheckinOutcome::Advanced { day, message, unlock } => {
                assert_eq!(day, 1);
                assert_eq!(message, daily_message(1).unwrap());
                assert_eq!(unlock, "checkin_1");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn same_date_repeat_is_idempotent() {
        let (after_first, _) = check_in(&CheckinState::default(), date(0));
        let (after_second, outcome) = check_in(&after_first, date(0));

        assert_eq!(after_second, after_first);
        assert_eq!(outcome, CheckinOutcome::AlreadyCheckedIn);
    }

    #[test]
    fn counter_caps_at_goal() {
        let mut state = CheckinState::default();
        for day in 0..CHECKIN_GOAL_DAYS {
            let (next, _) = check_in(&state, date(day));
            state = next;
        }
        assert_eq!(state.day, CHECKIN_GOAL_DAYS);
        assert!(state.is_complete());

        let (after, outcome) = check_in(&state, date(CHECKIN_GOAL_DAYS));
        assert_eq!(after, state);
        assert_eq!(outcome, CheckinOutcome::Completed);
    }

    #[test]
    fn message_table_bounds() {
        assert!(daily_message(0).is_none());
        assert!(daily_message(1).is_some());
        assert!(daily_message(CHECKIN_GOAL_DAYS).is_some());
        assert!(daily_message(CHECKIN_GOAL_DAYS + 1).is_none());
    }

    #[test]
    fn state_serializes_with_store_field_names() {
        let state = CheckinState {
            day: 3,
            last_date: Some(date(2)),
        };
        let json = serde_json::to_value(state).unwrap();
        assert_eq!(json["day"], 3);
        assert_eq!(json["lastDate"], "2026-01-03");

        let empty = serde_json::to_value(CheckinState::default()).unwrap();
        assert!(empty["lastDate"].is_null());
    }
}
