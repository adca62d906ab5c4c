//! Achievement catalog and unlock rules.
//!
//! # Responsibility
//! - Define the fixed catalog of unlockable flags.
//! - Provide pure, idempotent unlock logic over the persisted id list.
//!
//! # Invariants
//! - The unlocked set only ever grows; there is no removal operation.
//! - Ids outside the catalog are never added.
//! - Unlock order is preserved (the stored list is append-only).

/// One catalog entry: a one-way unlockable flag tied to a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementDef {
    /// Stable string id used in the persisted unlocked list.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Display description.
    pub description: &'static str,
}

/// The fixed catalog, in display order.
pub const ACHIEVEMENT_CATALOG: &[AchievementDef] = &[
    AchievementDef {
        id: "checkin_1",
        name: "First check-in",
        description: "Complete your first daily check-in.",
    },
    AchievementDef {
        id: "checkin_10",
        name: "Ten days in a row",
        description: "Complete 10 check-in days.",
    },
    AchievementDef {
        id: "checkin_50",
        name: "Fifty days of devotion",
        description: "Complete 50 check-in days.",
    },
    AchievementDef {
        id: "checkin_100",
        name: "One hundred days, complete",
        description: "Complete all 100 check-in days.",
    },
    AchievementDef {
        id: "guestbook_first",
        name: "First message",
        description: "Leave the first message in the guestbook.",
    },
    AchievementDef {
        id: "memory_first",
        name: "First memory",
        description: "Add a first memory to the gallery.",
    },
    AchievementDef {
        id: "winter_mode",
        name: "Winter has come",
        description: "Turn on winter mode for the first time.",
    },
];

/// Looks up a catalog entry by id.
pub fn catalog_entry(id: &str) -> Option<&'static AchievementDef> {
    ACHIEVEMENT_CATALOG.iter().find(|def| def.id == id)
}

/// Achievement id signalled by completing check-in day `day`.
///
/// Only the milestone days (1, 10, 50, 100) exist in the catalog; ids for
/// other days are produced but dropped by [`unlock`].
pub fn checkin_achievement_id(day: u32) -> String {
    format!("checkin_{day}")
}

/// Returns whether `id` is present in the unlocked list.
pub fn is_unlocked(unlocked: &[String], id: &str) -> bool {
    unlocked.iter().any(|entry| entry == id)
}

/// Pure unlock: appends `id` when it names a catalog entry and is not
/// already present.
///
/// Returns the grown list, or `None` when nothing changed (unknown id or
/// already unlocked).
pub fn unlock(unlocked: &[String], id: &str) -> Option<Vec<String>> {
    if is_unlocked(unlocked, id) || catalog_entry(id).is_none() {
        return None;
    }

    let mut next = unlocked.to_vec();
    next.push(id.to_string());
    Some(next)
}
