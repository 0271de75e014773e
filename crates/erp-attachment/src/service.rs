//! 附件服務

use std::collections::BTreeMap;

use crate::entry::{AttachmentEntry, AttachmentEntryId};
use crate::{AttachmentError, Result};

/// 附件存取介面
pub trait AttachmentEntryService: Send + Sync {
    /// 依 ID 取得附件項目
    fn get_by_id(&self, id: AttachmentEntryId) -> Result<AttachmentEntry>;

    /// 取得附件的二進位資料
    fn retrieve_data(&self, id: AttachmentEntryId) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone)]
struct StoredEntry {
    entry: AttachmentEntry,
    data: Option<Vec<u8>>,
}

/// 記憶體附件庫（ID 由 1 起依序配發）
#[derive(Debug, Clone, Default)]
pub struct InMemoryAttachmentStore {
    entries: BTreeMap<AttachmentEntryId, StoredEntry>,
    last_id: i32,
}

impl InMemoryAttachmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增資料型附件
    pub fn add_data(
        &mut self,
        filename: impl Into<String>,
        mime_type: Option<&str>,
        data: impl Into<Vec<u8>>,
    ) -> Result<AttachmentEntryId> {
        let id = self.next_id()?;
        let mut entry = AttachmentEntry::data(id, filename);
        if let Some(mime_type) = mime_type {
            entry = entry.with_mime_type(mime_type);
        }

        tracing::debug!("新增附件 {}: {}", id, entry.filename);
        self.entries.insert(
            id,
            StoredEntry {
                entry,
                data: Some(data.into()),
            },
        );
        Ok(id)
    }

    /// 新增網址型附件（無資料）
    pub fn add_url(&mut self, filename: impl Into<String>, url: impl Into<String>) -> Result<AttachmentEntryId> {
        let id = self.next_id()?;
        let entry = AttachmentEntry::url(id, filename, url);

        tracing::debug!("新增網址附件 {}: {}", id, entry.filename);
        self.entries.insert(id, StoredEntry { entry, data: None });
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn next_id(&mut self) -> Result<AttachmentEntryId> {
        let next = self.last_id.checked_add(1).ok_or(AttachmentError::IdExhausted)?;
        let id = AttachmentEntryId::of_repo_id(next)?;
        self.last_id = id.repo_id();
        Ok(id)
    }

    fn stored(&self, id: AttachmentEntryId) -> Result<&StoredEntry> {
        self.entries.get(&id).ok_or(AttachmentError::NotFound(id))
    }
}

impl AttachmentEntryService for InMemoryAttachmentStore {
    fn get_by_id(&self, id: AttachmentEntryId) -> Result<AttachmentEntry> {
        Ok(self.stored(id)?.entry.clone())
    }

    fn retrieve_data(&self, id: AttachmentEntryId) -> Result<Vec<u8>> {
        let stored = self.stored(id)?;
        stored.data.clone().ok_or_else(|| AttachmentError::NoData {
            id,
            filename: stored.entry.filename.clone(),
        })
    }
}
