//! Guestbook entry model and input normalization.
//!
//! # Responsibility
//! - Define the persisted guestbook entry shape.
//! - Trim and normalize user input before it reaches storage.
//!
//! # Invariants
//! - Entries are append-only; they are never edited or removed.
//! - Blank name or message is rejected before any state change.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// One signed guestbook message.
///
/// Serialized layout matches the store's `guestbook` list items:
/// `{"name": "...", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestbookEntry {
    pub name: String,
    pub message: String,
}

/// Input rejection reasons for a new entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestbookValidationError {
    /// Name is empty after trimming.
    BlankName,
    /// Message is empty after trimming.
    BlankMessage,
}

impl Display for GuestbookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "guestbook name must not be blank"),
            Self::BlankMessage => write!(f, "guestbook message must not be blank"),
        }
    }
}

impl Error for GuestbookValidationError {}

impl GuestbookEntry {
    /// Builds a validated entry from raw user input.
    ///
    /// # Contract
    /// - Leading/trailing whitespace is trimmed.
    /// - Runs of inner whitespace collapse to single spaces.
    /// - Blank name or message is rejected.
    pub fn new(
        name: impl AsRef<str>,
        message: impl AsRef<str>,
    ) -> Result<Self, GuestbookValidationError> {
        let name = normalize_text(name.as_ref());
        if name.is_empty() {
            return Err(GuestbookValidationError::BlankName);
        }

        let message = normalize_text(message.as_ref());
        if message.is_empty() {
            return Err(GuestbookValidationError::BlankMessage);
        }

        Ok(Self { name, message })
    }
}

fn normalize_text(value: &str) -> String {
    WHITESPACE_RE.replace_all(value.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::{GuestbookEntry, GuestbookValidationError};

    #[test]
    fn new_trims_and_collapses_whitespace() {
        let entry = GuestbookEntry::new("  Mai  Anh ", "miss\nyou\t lots ").unwrap();
        assert_eq!(entry.name, "Mai Anh");
        assert_eq!(entry.message, "miss you lots");
    }

    #[test]
    fn blank_inputs_are_rejected() {
        assert_eq!(
            GuestbookEntry::new("   ", "hi").unwrap_err(),
            GuestbookValidationError::BlankName
        );
        assert_eq!(
            GuestbookEntry::new("Mai", " \t\n").unwrap_err(),
            GuestbookValidationError::BlankMessage
        );
    }

    #[test]
    fn entry_serializes_with_store_field_names() {
        let entry = GuestbookEntry::new("Mai", "hello").unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["name"], "Mai");
        assert_eq!(json["message"], "hello");
    }
}
