//! Uploader view: intake, list, rename, delete, and copy-link actions.
//!
//! Every mutation goes through the document store. Upload reloads the
//! whole list afterwards; rename and delete patch the in-memory list once
//! the store call succeeds. Failures never escape as panics: each one is
//! recorded as a [`Notice`] and returned to the caller, and the list is
//! left as it was.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use dropshare_core::config::AppConfig;
use dropshare_core::error::AppError;
use dropshare_core::result::AppResult;
use dropshare_core::traits::{Clipboard, ConfirmPrompt};
use dropshare_core::types::{FileId, SortDirection};
use dropshare_database::store::DocumentStore;
use dropshare_entity::file::{CreateFileRecord, FileRecord, FileRecordPatch, MimeType};

use crate::encoder::{PickedFile, encode_file};
use crate::share::{CopiedIndicator, ShareLinkBuilder};

use super::intake::IntakePolicy;
use super::state::{Notice, RenameBuffer, UploaderState};

const LOAD_FAILED: &str = "Failed to load files.";
const UPLOAD_FAILED: &str = "Failed to upload file. Please try again.";
const RENAME_FAILED: &str = "Failed to rename file.";
const DELETE_FAILED: &str = "Failed to delete file.";
const COPY_FAILED: &str = "Failed to copy link.";

/// The home view. Owns the in-memory file list.
pub struct UploaderView {
    store: Arc<dyn DocumentStore>,
    clipboard: Arc<dyn Clipboard>,
    intake: IntakePolicy,
    links: ShareLinkBuilder,
    copied: CopiedIndicator,
    state: UploaderState,
}

impl std::fmt::Debug for UploaderView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploaderView")
            .field("store", &self.store.provider_name())
            .field("files", &self.state.files.len())
            .finish()
    }
}

impl UploaderView {
    /// Creates the view around the configured store and clipboard.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        clipboard: Arc<dyn Clipboard>,
        config: &AppConfig,
    ) -> Self {
        Self {
            store,
            clipboard,
            intake: IntakePolicy::from_config(&config.upload),
            links: ShareLinkBuilder::from_config(&config.share),
            copied: CopiedIndicator::new(Duration::from_millis(config.share.copied_indicator_ms)),
            state: UploaderState::default(),
        }
    }

    /// Current view state.
    pub fn state(&self) -> &UploaderState {
        &self.state
    }

    /// Listed records, newest first.
    pub fn files(&self) -> &[FileRecord] {
        &self.state.files
    }

    /// Share link builder used by copy-link.
    pub fn links(&self) -> &ShareLinkBuilder {
        &self.links
    }

    /// Dismiss the current notice.
    pub fn dismiss_notice(&mut self) {
        self.state.notice = None;
    }

    // ── List ─────────────────────────────────────────────────────

    /// Initial load when the view appears.
    pub async fn mount(&mut self) -> AppResult<()> {
        debug!("Mounting uploader view");
        self.refresh().await
    }

    /// Replace the list with a fresh fetch, newest first.
    pub async fn refresh(&mut self) -> AppResult<()> {
        self.state.loading = true;
        let result = self.store.list_all(SortDirection::Desc).await;
        self.state.loading = false;

        match result {
            Ok(files) => {
                debug!(count = files.len(), "File list loaded");
                self.state.files = files;
                Ok(())
            }
            Err(e) => Err(self.fail(e, LOAD_FAILED)),
        }
    }

    // ── Intake ───────────────────────────────────────────────────

    /// A drag entered the drop zone.
    pub fn drag_enter(&mut self) {
        self.state.drag_active = true;
    }

    /// A drag left the drop zone without dropping.
    pub fn drag_leave(&mut self) {
        self.state.drag_active = false;
    }

    /// Files were dropped. Only the first is processed.
    pub async fn drop_files(&mut self, files: Vec<PickedFile>) -> AppResult<Option<FileId>> {
        self.state.drag_active = false;
        self.pick_files(files).await
    }

    /// Files were chosen in the picker. Only the first is processed.
    pub async fn pick_files(&mut self, files: Vec<PickedFile>) -> AppResult<Option<FileId>> {
        let total = files.len();
        let Some(first) = files.into_iter().next() else {
            return Ok(None);
        };
        if total > 1 {
            debug!(ignored = total - 1, "Only the first picked file is uploaded");
        }
        self.upload(first).await.map(Some)
    }

    /// Validate, encode, and store one file, then reload the list.
    pub async fn upload(&mut self, file: PickedFile) -> AppResult<FileId> {
        self.state.notice = None;

        let mime_type = match self.intake.validate(&file) {
            Ok(mime_type) => mime_type,
            Err(e) => {
                info!(name = %file.name, reason = %e.message, "Upload rejected at intake");
                return Err(self.fail(e, UPLOAD_FAILED));
            }
        };

        self.state.uploading = true;
        let created = self.encode_and_create(&file, mime_type).await;

        let result = match created {
            Ok(id) => {
                info!(file_id = %id, name = %file.name, "File uploaded");
                // The upload itself succeeded even if the reload does not; the
                // reload failure is already surfaced as a notice.
                let _ = self.refresh().await;
                Ok(id)
            }
            Err(e) => Err(self.fail(e, UPLOAD_FAILED)),
        };

        self.state.uploading = false;
        result
    }

    async fn encode_and_create(
        &self,
        file: &PickedFile,
        mime_type: MimeType,
    ) -> AppResult<FileId> {
        let encoded = encode_file(file, mime_type).await?;
        self.intake.check_size(encoded.size_bytes)?;

        let record = CreateFileRecord {
            display_name: file.name.clone(),
            content: encoded.data_url,
            size_bytes: i64::try_from(encoded.size_bytes)
                .map_err(|_| AppError::validation("File size out of range"))?,
            mime_type,
        };
        self.store.create(&record).await
    }

    // ── Rename ───────────────────────────────────────────────────

    /// Open the rename editor on `id`, seeded with its current name.
    ///
    /// Opening it on another record discards any unsaved text.
    pub fn begin_rename(&mut self, id: FileId) -> AppResult<&RenameBuffer> {
        let record = self
            .state
            .find(id)
            .ok_or_else(|| AppError::not_found(format!("File {id} is not listed")))?;

        let buffer = RenameBuffer {
            id,
            text: record.display_name.clone(),
        };
        Ok(self.state.editing.insert(buffer))
    }

    /// Replace the editor text. Ignored when no editor is open.
    pub fn edit_rename(&mut self, text: impl Into<String>) {
        if let Some(editing) = self.state.editing.as_mut() {
            editing.text = text.into();
        }
    }

    /// Confirm the rename (Enter).
    ///
    /// Leaves edit mode in every case. Returns `Ok(false)` without touching
    /// the store when the trimmed text is empty or no editor is open.
    pub async fn commit_rename(&mut self) -> AppResult<bool> {
        let Some(buffer) = self.state.editing.take() else {
            return Ok(false);
        };

        let name = buffer.text.trim();
        if name.is_empty() {
            debug!(file_id = %buffer.id, "Empty rename ignored");
            return Ok(false);
        }

        let patch = FileRecordPatch::rename(name);
        match self.store.update(buffer.id, &patch).await {
            Ok(()) => {
                if let Some(record) = self.state.files.iter_mut().find(|f| f.id == buffer.id) {
                    patch.apply_to(record);
                }
                info!(file_id = %buffer.id, name = %name, "File renamed");
                Ok(true)
            }
            Err(e) => Err(self.fail(e, RENAME_FAILED)),
        }
    }

    /// The editor lost focus. Commits, same as Enter.
    pub async fn blur_rename(&mut self) -> AppResult<bool> {
        self.commit_rename().await
    }

    /// Discard the editor without saving (Escape).
    pub fn cancel_rename(&mut self) {
        if let Some(buffer) = self.state.editing.take() {
            debug!(file_id = %buffer.id, "Rename cancelled");
        }
    }

    // ── Delete ───────────────────────────────────────────────────

    /// Delete a listed record after the user confirms.
    ///
    /// Returns `Ok(false)` if the user declined.
    pub async fn delete(&mut self, id: FileId, prompt: &dyn ConfirmPrompt) -> AppResult<bool> {
        let name = self
            .state
            .find(id)
            .map(|f| f.display_name.clone())
            .ok_or_else(|| AppError::not_found(format!("File {id} is not listed")))?;

        let question = format!("Delete \"{name}\"? This cannot be undone.");
        let confirmed = match prompt.confirm(&question) {
            Ok(confirmed) => confirmed,
            Err(e) => return Err(self.fail(e, DELETE_FAILED)),
        };
        if !confirmed {
            debug!(file_id = %id, "Delete declined");
            return Ok(false);
        }

        match self.store.delete(id).await {
            Ok(()) => {
                self.state.files.retain(|f| f.id != id);
                if self.state.is_editing(id) {
                    self.state.editing = None;
                }
                if self.copied.is_marked(id) {
                    self.copied.clear();
                }
                info!(file_id = %id, name = %name, "File deleted");
                Ok(true)
            }
            Err(e) => Err(self.fail(e, DELETE_FAILED)),
        }
    }

    // ── Share ────────────────────────────────────────────────────

    /// Copy the share link for `id` and mark it as copied.
    pub fn copy_link(&mut self, id: FileId) -> AppResult<String> {
        let link = self.links.link_for(id);
        match self.clipboard.write_text(&link) {
            Ok(()) => {
                self.copied.mark(id);
                info!(file_id = %id, "Share link copied");
                Ok(link)
            }
            Err(e) => Err(self.fail(e, COPY_FAILED)),
        }
    }

    /// Whether `id` currently shows as copied.
    pub fn is_copied(&self, id: FileId) -> bool {
        self.copied.is_marked(id)
    }

    /// The record currently showing as copied, if any.
    pub fn copied(&self) -> Option<FileId> {
        self.copied.current()
    }

    fn fail(&mut self, err: AppError, fallback: &str) -> AppError {
        if !err.is_validation() {
            warn!(error = %err, "{fallback}");
        }
        self.state.notice = Some(Notice::from_error(&err, fallback));
        err
    }
}
