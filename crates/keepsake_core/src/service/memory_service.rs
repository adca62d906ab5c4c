//! Memory gallery use-case service.
//!
//! # Responsibility
//! - Encode uploaded media into gallery items and append them as one
//!   batch.
//! - Unlock `memory_first` when a non-empty batch lands.
//!
//! # Invariants
//! - The stored list is written once per batch, after every item is
//!   encoded.
//! - An empty batch changes nothing and unlocks nothing.

use crate::model::memory::MemoryItem;
use crate::render::RenderEffect;
use crate::repo::kv_repo::{KvRepository, RepoResult};
use crate::repo::widget_store::WidgetStore;
use crate::service::achievement_service::{list_effect, unlock_into_store};
use log::info;

/// One media payload waiting to be ingested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryUpload {
    /// MIME type used for kind classification and the data URL.
    pub mime: String,
    /// Raw media bytes.
    pub bytes: Vec<u8>,
}

/// Result of one import batch.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryReport {
    /// Number of items appended.
    pub added: usize,
    pub effects: Vec<RenderEffect>,
}

/// Use-case service for the memory gallery.
pub struct MemoryService<R: KvRepository> {
    store: WidgetStore<R>,
}

impl<R: KvRepository> MemoryService<R> {
    pub fn new(store: WidgetStore<R>) -> Self {
        Self { store }
    }

    /// Appends a batch of uploads to the gallery.
    ///
    /// # Contract
    /// - Empty batch: no write, no unlock, no effects.
    /// - Non-empty batch: one write after encoding all items, then the
    ///   `memory_first` unlock and refreshed gallery/achievement views.
    pub fn import(&self, uploads: &[MemoryUpload]) -> RepoResult<MemoryReport> {
        if uploads.is_empty() {
            return Ok(MemoryReport {
                added: 0,
                effects: Vec::new(),
            });
        }

        let mut items = self.store.load_memories();
        for upload in uploads {
            items.push(MemoryItem::from_bytes(&upload.mime, &upload.bytes));
        }
        self.store.save_memories(&items)?;
        unlock_into_store(&self.store, "memory_first")?;
        info!(
            "event=memory_import module=service status=ok added={} total={}",
            uploads.len(),
            items.len()
        );

        Ok(MemoryReport {
            added: uploads.len(),
            effects: vec![
                RenderEffect::MemoryGallery(items),
                list_effect(&self.store.load_unlocked()),
            ],
        })
    }

    /// All gallery items in insertion order.
    pub fn items(&self) -> Vec<MemoryItem> {
        self.store.load_memories()
    }

    /// Memory gallery render effect.
    pub fn render_gallery(&self) -> RenderEffect {
        RenderEffect::MemoryGallery(self.items())
    }
}
