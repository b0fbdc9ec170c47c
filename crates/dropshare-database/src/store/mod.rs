//! The document store seam and its implementations.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use dropshare_core::result::AppResult;
use dropshare_core::types::{FileId, SortDirection};
use dropshare_entity::file::{CreateFileRecord, FileRecord, FileRecordPatch};

pub use memory::MemoryDocumentStore;
pub use postgres::{PgDocumentStore, mask_password};

/// Remote collection of file records.
///
/// Every call is atomic on its own; callers never group calls into a
/// transaction and never retry.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider name (e.g. "postgres", "memory").
    fn provider_name(&self) -> &str;

    /// Insert a record, stamping the creation time. Returns the new id.
    async fn create(&self, data: &CreateFileRecord) -> AppResult<FileId>;

    /// Every record, ordered by creation time.
    async fn list_all(&self, order: SortDirection) -> AppResult<Vec<FileRecord>>;

    /// Fetch one record. `Ok(None)` when no record has this id.
    async fn get_by_id(&self, id: FileId) -> AppResult<Option<FileRecord>>;

    /// Merge `patch` into the record. Fails with `NotFound` for an unknown id.
    async fn update(&self, id: FileId, patch: &FileRecordPatch) -> AppResult<()>;

    /// Remove the record. Removing an id that does not exist succeeds.
    async fn delete(&self, id: FileId) -> AppResult<()>;
}
