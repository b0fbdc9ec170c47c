//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;

use dropshare_core::config::AppConfig;
use dropshare_core::error::AppError;
use dropshare_core::result::AppResult;
use dropshare_core::types::{FileId, SortDirection};
use dropshare_database::store::{DocumentStore, MemoryDocumentStore};
use dropshare_entity::file::{CreateFileRecord, FileRecord, FileRecordPatch, MimeType};
use dropshare_service::{MemoryClipboard, PickedFile, UploaderView};

/// Origin share links are built against in tests.
pub const ORIGIN: &str = "https://example.com";

/// Test application context
pub struct TestApp {
    /// The document store, for direct inspection
    pub store: Arc<MemoryDocumentStore>,
    /// Clipboard the copy-link action writes to
    pub clipboard: Arc<MemoryClipboard>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.store.provider = "memory".to_string();
        config.share.origin = ORIGIN.to_string();
        config.validate().expect("test config is valid");

        Self {
            store: Arc::new(MemoryDocumentStore::new()),
            clipboard: Arc::new(MemoryClipboard::new()),
            config,
        }
    }

    /// A fresh uploader view over this app's store and clipboard
    pub fn uploader(&self) -> UploaderView {
        UploaderView::new(
            Arc::clone(&self.store) as Arc<dyn DocumentStore>,
            Arc::clone(&self.clipboard) as Arc<dyn dropshare_core::traits::Clipboard>,
            &self.config,
        )
    }

    /// Insert a record directly, bypassing the uploader
    pub async fn seed(&self, name: &str, mime_type: MimeType) -> FileId {
        self.store
            .create(&CreateFileRecord {
                display_name: name.to_string(),
                content: format!("data:{mime_type};base64,AAAA"),
                size_bytes: 3,
                mime_type,
            })
            .await
            .expect("seed record")
    }

    /// Everything in the store, newest first
    pub async fn stored(&self) -> Vec<FileRecord> {
        self.store
            .list_all(SortDirection::Desc)
            .await
            .expect("list store")
    }
}

/// An in-memory picked file of `size` bytes
pub fn picked(name: &str, mime_type: &str, size: usize) -> PickedFile {
    PickedFile::from_bytes(name, mime_type, vec![0x5a; size])
}

/// A store whose every call fails, as when the backend is unreachable
#[derive(Debug, Default)]
pub struct DownStore;

#[async_trait]
impl DocumentStore for DownStore {
    fn provider_name(&self) -> &str {
        "down"
    }

    async fn create(&self, _data: &CreateFileRecord) -> AppResult<FileId> {
        Err(AppError::store("connection refused"))
    }

    async fn list_all(&self, _order: SortDirection) -> AppResult<Vec<FileRecord>> {
        Err(AppError::store("connection refused"))
    }

    async fn get_by_id(&self, _id: FileId) -> AppResult<Option<FileRecord>> {
        Err(AppError::store("connection refused"))
    }

    async fn update(&self, _id: FileId, _patch: &FileRecordPatch) -> AppResult<()> {
        Err(AppError::store("connection refused"))
    }

    async fn delete(&self, _id: FileId) -> AppResult<()> {
        Err(AppError::store("connection refused"))
    }
}
