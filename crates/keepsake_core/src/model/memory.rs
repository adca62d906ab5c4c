//! Memory gallery item model and media encoding.
//!
//! # Responsibility
//! - Define the persisted gallery item shape.
//! - Classify media kind from MIME type and build `data:` URL payloads.
//!
//! # Invariants
//! - Items are append-only.
//! - Classification rule: `video/*` -> video, `audio/*` -> audio,
//!   everything else -> image.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static DATA_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^data:[a-z0-9.+-]+/[a-z0-9.+-]+(;base64)?,").expect("valid data url regex")
});

/// Media category of one gallery item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

impl MediaKind {
    /// Classifies a MIME type string.
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("video/") {
            Self::Video
        } else if mime.starts_with("audio/") {
            Self::Audio
        } else {
            Self::Image
        }
    }

    /// Stable lowercase label, matching the persisted `type` values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }
}

/// One uploaded memory.
///
/// Serialized layout matches the store's `memories` list items:
/// `{"type": "image", "data": "data:image/png;base64,..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryItem {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Media payload as a base64 `data:` URL.
    pub data: String,
}

impl MemoryItem {
    /// Encodes raw media bytes into a gallery item.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        Self {
            kind: MediaKind::from_mime(mime),
            data: format!("data:{mime};base64,{}", BASE64.encode(bytes)),
        }
    }

    /// Returns whether `value` has the shape of a `data:` URL.
    pub fn is_data_url(value: &str) -> bool {
        DATA_URL_RE.is_match(value)
    }
}

/// Best-effort MIME type for a lowercase file extension.
///
/// Unknown extensions fall back to `application/octet-stream`, which the
/// classification rule renders as an image (the historical else-branch).
pub fn mime_from_extension(extension: &str) -> &'static str {
    match extension {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "m4a" => "audio/mp4",
        "flac" => "audio/flac",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::{mime_from_extension, MediaKind, MemoryItem};

    #[test]
    fn mime_prefix_classification() {
        assert_eq!(MediaKind::from_mime("video/mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_mime("audio/ogg"), MediaKind::Audio);
        assert_eq!(MediaKind::from_mime("image/png"), MediaKind::Image);
        // Historical else-branch: anything unrecognized renders as image.
        assert_eq!(
            MediaKind::from_mime("application/octet-stream"),
            MediaKind::Image
        );
    }

    #[test]
    fn from_bytes_builds_a_data_url() {
        let item = MemoryItem::from_bytes("image/png", &[0x89, 0x50, 0x4e, 0x47]);
        assert_eq!(item.kind, MediaKind::Image);
        assert!(item.data.starts_with("data:image/png;base64,"));
        assert!(MemoryItem::is_data_url(&item.data));
        assert!(!MemoryItem::is_data_url("not a data url"));
    }

    #[test]
    fn item_serializes_with_store_field_names() {
        let item = MemoryItem::from_bytes("audio/wav", b"RIFF");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "audio");
        assert!(json["data"].as_str().unwrap().starts_with("data:audio/wav"));
    }

    #[test]
    fn extension_mapping_covers_all_kinds() {
        assert_eq!(mime_from_extension("jpg"), "image/jpeg");
        assert_eq!(mime_from_extension("webm"), "video/webm");
        assert_eq!(mime_from_extension("flac"), "audio/flac");
        assert_eq!(mime_from_extension("zip"), "application/octet-stream");
    }
}
