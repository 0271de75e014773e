//! # ERP Attachment
//!
//! 附件項目、附件服務與下載流程

pub mod entry;
pub mod process;
pub mod service;

pub use entry::{AttachmentEntry, AttachmentEntryId, AttachmentEntryType};
pub use process::{AttachmentEntryDownload, ProcessExecutionResult, ReportData, ReportSink, MSG_OK};
pub use service::{AttachmentEntryService, InMemoryAttachmentStore};

/// 附件錯誤
#[derive(Debug, thiserror::Error)]
pub enum AttachmentError {
    #[error("無效的附件記錄: {0}")]
    InvalidRecordId(#[from] erp_core::InvalidRepoIdError),

    #[error("找不到附件: {0}")]
    NotFound(AttachmentEntryId),

    #[error("附件 {id} 沒有可下載的資料（{filename}）")]
    NoData { id: AttachmentEntryId, filename: String },

    #[error("附件 ID 已用盡")]
    IdExhausted,
}

pub type Result<T> = std::result::Result<T, AttachmentError>;
