//! Transient, non-persisted uploader state.

use dropshare_core::error::AppError;
use dropshare_core::types::FileId;
use dropshare_entity::file::FileRecord;

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The picked file was rejected at intake; nothing was written.
    Validation,
    /// A store call failed; the action was abandoned.
    Error,
}

/// A message shown to the user after a failed action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub kind: NoticeKind,
    /// Text shown to the user.
    pub message: String,
}

impl Notice {
    /// Build a notice for `err`, using `fallback` for anything that is
    /// not a validation failure.
    pub fn from_error(err: &AppError, fallback: &str) -> Self {
        let kind = if err.is_validation() {
            NoticeKind::Validation
        } else {
            NoticeKind::Error
        };
        Self {
            kind,
            message: err.user_message(fallback),
        }
    }
}

/// In-place rename editor, bound to one record. While present, the editor
/// holds focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameBuffer {
    /// Record being renamed.
    pub id: FileId,
    /// Current text in the editor.
    pub text: String,
}

/// Everything the uploader shows besides the records themselves.
#[derive(Debug, Clone, Default)]
pub struct UploaderState {
    /// Records, newest first.
    pub files: Vec<FileRecord>,
    /// The list fetch is in flight.
    pub loading: bool,
    /// An upload is in flight.
    pub uploading: bool,
    /// A drag is hovering over the drop zone.
    pub drag_active: bool,
    /// Active rename editor, if any.
    pub editing: Option<RenameBuffer>,
    /// Last failure shown to the user.
    pub notice: Option<Notice>,
}

impl UploaderState {
    /// Whether the empty-state message should show.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.files.is_empty()
    }

    /// Find a listed record.
    pub fn find(&self, id: FileId) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.id == id)
    }

    /// Whether `id` is the record being renamed.
    pub fn is_editing(&self, id: FileId) -> bool {
        self.editing.as_ref().is_some_and(|e| e.id == id)
    }
}
