//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use dropshare_core::config::StoreConfig;
use dropshare_core::error::AppError;
use dropshare_core::result::AppResult;
use dropshare_core::types::{FileId, SortDirection};
use dropshare_entity::file::{CreateFileRecord, FileRecord, FileRecordPatch};

use crate::store::{DocumentStore, MemoryDocumentStore, PgDocumentStore};

/// The one configured store client, created at startup and handed to the
/// views that need it.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner store implementation.
    inner: Arc<dyn DocumentStore>,
}

impl StoreManager {
    /// Create a store manager from configuration.
    pub async fn new(config: &StoreConfig) -> AppResult<Self> {
        let inner: Arc<dyn DocumentStore> = match config.provider.as_str() {
            "postgres" => {
                Arc::new(PgDocumentStore::connect(config).await?)
            }
            "memory" => {
                info!(collection = %config.collection, "Initializing in-memory document store");
                Arc::new(MemoryDocumentStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: postgres, memory"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a store manager from an existing store (for testing).
    pub fn from_store(store: Arc<dyn DocumentStore>) -> Self {
        Self { inner: store }
    }

    /// Shared handle to the inner store.
    pub fn store(&self) -> Arc<dyn DocumentStore> {
        Arc::clone(&self.inner)
    }
}

#[async_trait]
impl DocumentStore for StoreManager {
    fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }

    async fn create(&self, data: &CreateFileRecord) -> AppResult<FileId> {
        self.inner.create(data).await
    }

    async fn list_all(&self, order: SortDirection) -> AppResult<Vec<FileRecord>> {
        self.inner.list_all(order).await
    }

    async fn get_by_id(&self, id: FileId) -> AppResult<Option<FileRecord>> {
        self.inner.get_by_id(id).await
    }

    async fn update(&self, id: FileId, patch: &FileRecordPatch) -> AppResult<()> {
        self.inner.update(id, patch).await
    }

    async fn delete(&self, id: FileId) -> AppResult<()> {
        self.inner.delete(id).await
    }
}
