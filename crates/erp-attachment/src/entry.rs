//! 附件項目

use serde::{Deserialize, Serialize};

erp_core::repo_id_type!(
    /// 附件項目 ID
    AttachmentEntryId,
    "AD_AttachmentEntry_ID"
);

/// 附件類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttachmentEntryType {
    /// 以二進位資料儲存
    Data,
    /// 僅記錄外部網址
    Url,
}

/// 未知類型時使用的 MIME
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// 附件項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentEntry {
    pub id: AttachmentEntryId,
    pub entry_type: AttachmentEntryType,
    pub filename: String,

    /// 明確指定的 MIME 類型
    #[serde(default)]
    pub mime_type: Option<String>,

    #[serde(default)]
    pub url: Option<String>,
}

impl AttachmentEntry {
    /// 創建資料型附件
    pub fn data(id: AttachmentEntryId, filename: impl Into<String>) -> Self {
        Self {
            id,
            entry_type: AttachmentEntryType::Data,
            filename: filename.into(),
            mime_type: None,
            url: None,
        }
    }

    /// 創建網址型附件
    pub fn url(id: AttachmentEntryId, filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            entry_type: AttachmentEntryType::Url,
            filename: filename.into(),
            mime_type: None,
            url: Some(url.into()),
        }
    }

    /// 建構器模式：設置 MIME 類型
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// MIME 類型：未指定時依副檔名推斷
    pub fn mime_type(&self) -> &str {
        match self.mime_type.as_deref() {
            Some(mime_type) if !mime_type.trim().is_empty() => mime_type,
            _ => mime_type_for_filename(&self.filename),
        }
    }

    pub fn is_data(&self) -> bool {
        self.entry_type == AttachmentEntryType::Data
    }
}

/// 依副檔名推斷 MIME 類型
pub fn mime_type_for_filename(filename: &str) -> &'static str {
    let extension = match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_ascii_lowercase(),
        _ => return DEFAULT_MIME_TYPE,
    };

    match extension.as_str() {
        "pdf" => "application/pdf",
        "txt" | "log" => "text/plain",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "xml" => "application/xml",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "zip" => "application/zip",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => DEFAULT_MIME_TYPE,
    }
}
