//! Guestbook use-case service.
//!
//! # Responsibility
//! - Append validated entries to the stored list and re-render it.
//! - Unlock `guestbook_first` on the first successful append.
//!
//! # Invariants
//! - Rejected input leaves the stored list untouched.
//! - Entries render in insertion order.

use crate::model::guestbook::{GuestbookEntry, GuestbookValidationError};
use crate::render::RenderEffect;
use crate::repo::kv_repo::{KvRepository, RepoError};
use crate::repo::widget_store::WidgetStore;
use crate::service::achievement_service::{list_effect, unlock_into_store};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from guestbook use-cases.
#[derive(Debug)]
pub enum GuestbookServiceError {
    /// Input rejected before any state change.
    Invalid(GuestbookValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for GuestbookServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for GuestbookServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<GuestbookValidationError> for GuestbookServiceError {
    fn from(value: GuestbookValidationError) -> Self {
        Self::Invalid(value)
    }
}

impl From<RepoError> for GuestbookServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Result of one successful append.
#[derive(Debug, Clone, PartialEq)]
pub struct GuestbookReport {
    pub entry: GuestbookEntry,
    pub effects: Vec<RenderEffect>,
}

/// Use-case service for the guestbook.
pub struct GuestbookService<R: KvRepository> {
    store: WidgetStore<R>,
}

impl<R: KvRepository> GuestbookService<R> {
    pub fn new(store: WidgetStore<R>) -> Self {
        Self { store }
    }

    /// Validates, appends, persists, and unlocks `guestbook_first`.
    pub fn add_entry(
        &self,
        name: impl AsRef<str>,
        message: impl AsRef<str>,
    ) -> Result<GuestbookReport, GuestbookServiceError> {
        let entry = GuestbookEntry::new(name, message)?;

        let mut entries = self.store.load_guestbook();
        entries.push(entry.clone());
        self.store.save_guestbook(&entries)?;
        unlock_into_store(&self.store, "guestbook_first")?;
        info!(
            "event=guestbook_add module=service status=ok count={}",
            entries.len()
        );

        Ok(GuestbookReport {
            entry,
            effects: vec![
                RenderEffect::GuestbookList(entries),
                list_effect(&self.store.load_unlocked()),
            ],
        })
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> Vec<GuestbookEntry> {
        self.store.load_guestbook()
    }

    /// Guestbook list render effect.
    pub fn render_list(&self) -> RenderEffect {
        RenderEffect::GuestbookList(self.entries())
    }
}
