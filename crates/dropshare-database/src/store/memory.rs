//! In-memory document store using dashmap.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::{debug, info};

use dropshare_core::error::AppError;
use dropshare_core::result::AppResult;
use dropshare_core::types::{FileId, SortDirection};
use dropshare_entity::file::{CreateFileRecord, FileRecord, FileRecordPatch};

use super::DocumentStore;

/// A stored record plus its insertion sequence, which breaks ties between
/// records created within the same clock tick.
#[derive(Debug, Clone)]
struct Entry {
    seq: u64,
    record: FileRecord,
}

/// Process-local document store. Contents are lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    entries: Arc<DashMap<FileId, Entry>>,
    next_seq: Arc<AtomicU64>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn provider_name(&self) -> &str {
        "memory"
    }

    async fn create(&self, data: &CreateFileRecord) -> AppResult<FileId> {
        let mut id = FileId::new();
        while self.entries.contains_key(&id) {
            id = FileId::new();
        }

        let record = FileRecord {
            id,
            display_name: data.display_name.clone(),
            content: data.content.clone(),
            size_bytes: data.size_bytes,
            mime_type: data.mime_type,
            created_at: Utc::now(),
        };
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        self.entries.insert(id, Entry { seq, record });

        info!(file_id = %id, size = data.size_bytes, "File record created in memory");
        Ok(id)
    }

    async fn list_all(&self, order: SortDirection) -> AppResult<Vec<FileRecord>> {
        let mut entries: Vec<Entry> = self.entries.iter().map(|e| e.value().clone()).collect();
        entries.sort_by(|a, b| {
            a.record
                .created_at
                .cmp(&b.record.created_at)
                .then(a.seq.cmp(&b.seq))
        });
        if order == SortDirection::Desc {
            entries.reverse();
        }

        debug!(count = entries.len(), "Listed in-memory file records");
        Ok(entries.into_iter().map(|e| e.record).collect())
    }

    async fn get_by_id(&self, id: FileId) -> AppResult<Option<FileRecord>> {
        Ok(self.entries.get(&id).map(|e| e.record.clone()))
    }

    async fn update(&self, id: FileId, patch: &FileRecordPatch) -> AppResult<()> {
        let mut entry = self
            .entries
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("File {id} not found")))?;
        patch.apply_to(&mut entry.record);
        Ok(())
    }

    async fn delete(&self, id: FileId) -> AppResult<()> {
        let removed = self.entries.remove(&id).is_some();
        debug!(file_id = %id, removed, "Deleted in-memory file record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dropshare_entity::file::MimeType;

    fn new_record(name: &str) -> CreateFileRecord {
        CreateFileRecord {
            display_name: name.to_string(),
            content: "data:image/png;base64,AAAA".to_string(),
            size_bytes: 3,
            mime_type: MimeType::Png,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamp() {
        let store = MemoryDocumentStore::new();
        let before = Utc::now();
        let id = store.create(&new_record("a.png")).await.expect("create");

        let record = store.get_by_id(id).await.expect("get").expect("present");
        assert_eq!(record.id, id);
        assert_eq!(record.display_name, "a.png");
        assert!(record.created_at >= before);
    }

    #[tokio::test]
    async fn test_list_is_newest_first_even_within_one_tick() {
        let store = MemoryDocumentStore::new();
        let first = store.create(&new_record("first.png")).await.expect("create");
        let second = store.create(&new_record("second.png")).await.expect("create");
        let third = store.create(&new_record("third.png")).await.expect("create");

        let ids: Vec<FileId> = store
            .list_all(SortDirection::Desc)
            .await
            .expect("list")
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![third, second, first]);

        let asc: Vec<FileId> = store
            .list_all(SortDirection::Asc)
            .await
            .expect("list")
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(asc, vec![first, second, third]);
    }

    #[tokio::test]
    async fn test_update_merges_display_name_only() {
        let store = MemoryDocumentStore::new();
        let id = store.create(&new_record("a.png")).await.expect("create");
        let before = store.get_by_id(id).await.expect("get").expect("present");

        store
            .update(id, &FileRecordPatch::rename("b.png"))
            .await
            .expect("update");

        let after = store.get_by_id(id).await.expect("get").expect("present");
        assert_eq!(after.display_name, "b.png");
        assert_eq!(after.content, before.content);
        assert_eq!(after.created_at, before.created_at);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = MemoryDocumentStore::new();
        let err = store
            .update(FileId::new(), &FileRecordPatch::rename("x"))
            .await
            .expect_err("missing");
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_removes_only_target_and_is_idempotent() {
        let store = MemoryDocumentStore::new();
        let keep = store.create(&new_record("keep.png")).await.expect("create");
        let gone = store.create(&new_record("gone.png")).await.expect("create");

        store.delete(gone).await.expect("delete");
        store.delete(gone).await.expect("delete again");

        assert!(store.get_by_id(gone).await.expect("get").is_none());
        assert!(store.get_by_id(keep).await.expect("get").is_some());
        assert_eq!(store.len(), 1);
    }
}
