//! File record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use dropshare_core::types::FileId;

use super::mime::MimeType;
use super::size::format_size;

/// One uploaded file, as stored in the document collection.
///
/// Only `display_name` changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct FileRecord {
    /// Store-assigned identifier.
    pub id: FileId,
    /// Human-readable name, initially the original file name.
    pub display_name: String,
    /// Encoded payload (`data:` URL).
    pub content: String,
    /// Size of the original file in bytes.
    pub size_bytes: i64,
    /// MIME type of the original file.
    #[sqlx(try_from = "String")]
    pub mime_type: MimeType,
    /// Server-assigned creation time.
    pub created_at: DateTime<Utc>,
}

impl FileRecord {
    /// Size formatted for display, e.g. `200.0 KB`.
    pub fn display_size(&self) -> String {
        format_size(self.size_bytes.max(0) as u64)
    }
}

/// Data required to create a new file record.
///
/// The id and creation time are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFileRecord {
    /// Initial display name.
    pub display_name: String,
    /// Encoded payload.
    pub content: String,
    /// Size of the original file in bytes.
    pub size_bytes: i64,
    /// MIME type.
    pub mime_type: MimeType,
}

/// Partial update applied by `update`.
///
/// Rename is the only mutation the views perform, so the display name is
/// the only patchable field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecordPatch {
    /// New display name, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl FileRecordPatch {
    /// Patch that renames the record.
    pub fn rename(display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
        }
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none()
    }

    /// Apply the patch to an in-memory record.
    pub fn apply_to(&self, record: &mut FileRecord) {
        if let Some(name) = &self.display_name {
            record.display_name = name.clone();
        }
    }
}
