//! 附件下載流程

use std::sync::Arc;

use crate::entry::AttachmentEntryId;
use crate::service::AttachmentEntryService;
use crate::Result;

/// 流程執行成功的回傳訊息
pub const MSG_OK: &str = "OK";

/// 接收報表（下載檔案）資料的對象
pub trait ReportSink {
    fn set_report_data(&mut self, data: Vec<u8>, filename: &str, content_type: &str);
}

/// 下載的檔案內容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportData {
    pub data: Vec<u8>,
    pub filename: String,
    pub content_type: String,
}

/// 流程執行結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessExecutionResult {
    report: Option<ReportData>,
}

impl ProcessExecutionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已設置的報表資料
    pub fn report(&self) -> Option<&ReportData> {
        self.report.as_ref()
    }

    pub fn into_report(self) -> Option<ReportData> {
        self.report
    }
}

impl ReportSink for ProcessExecutionResult {
    fn set_report_data(&mut self, data: Vec<u8>, filename: &str, content_type: &str) {
        self.report = Some(ReportData {
            data,
            filename: filename.to_string(),
            content_type: content_type.to_string(),
        });
    }
}

/// 附件下載流程
///
/// 依記錄 ID 取得附件，並將內容、檔名與 MIME 類型交給 [`ReportSink`]。
pub struct AttachmentEntryDownload {
    service: Arc<dyn AttachmentEntryService>,
}

impl AttachmentEntryDownload {
    pub fn new(service: Arc<dyn AttachmentEntryService>) -> Self {
        Self { service }
    }

    /// 執行下載
    pub fn do_it(&self, record_id: i32, sink: &mut dyn ReportSink) -> Result<&'static str> {
        let entry_id = AttachmentEntryId::of_repo_id(record_id)?;

        let entry = self.service.get_by_id(entry_id)?;
        let data = self.service.retrieve_data(entry.id)?;

        tracing::info!(
            "下載附件 {}: {}（{}，{} bytes）",
            entry.id,
            entry.filename,
            entry.mime_type(),
            data.len()
        );
        sink.set_report_data(data, &entry.filename, entry.mime_type());

        Ok(MSG_OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::InMemoryAttachmentStore;
    use crate::AttachmentError;
    use rstest::rstest;

    fn download(store: InMemoryAttachmentStore) -> AttachmentEntryDownload {
        AttachmentEntryDownload::new(Arc::new(store))
    }

    #[test]
    fn test_download_hands_data_to_sink() {
        let bytes = b"%PDF-1.7 invoice".to_vec();
        let mut store = InMemoryAttachmentStore::new();
        let id = store
            .add_data("invoice.pdf", Some("application/pdf"), bytes.clone())
            .unwrap();

        let mut result = ProcessExecutionResult::new();
        let msg = download(store).do_it(id.repo_id(), &mut result).unwrap();

        assert_eq!(msg, MSG_OK);
        assert_eq!(
            result.into_report(),
            Some(ReportData {
                data: bytes,
                filename: "invoice.pdf".to_string(),
                content_type: "application/pdf".to_string(),
            })
        );
    }

    #[test]
    fn test_download_derives_mime_type() {
        let mut store = InMemoryAttachmentStore::new();
        let id = store.add_data("photo.png", None, vec![0x89, 0x50]).unwrap();

        let mut result = ProcessExecutionResult::new();
        download(store).do_it(id.repo_id(), &mut result).unwrap();

        assert_eq!(result.report().unwrap().content_type, "image/png");
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    fn test_invalid_record_id(#[case] record_id: i32) {
        let mut result = ProcessExecutionResult::new();
        let err = download(InMemoryAttachmentStore::new())
            .do_it(record_id, &mut result)
            .unwrap_err();

        assert!(matches!(err, AttachmentError::InvalidRecordId(_)));
        assert!(result.report().is_none());
    }

    #[test]
    fn test_missing_entry() {
        let mut result = ProcessExecutionResult::new();
        let err = download(InMemoryAttachmentStore::new())
            .do_it(42, &mut result)
            .unwrap_err();

        assert!(matches!(err, AttachmentError::NotFound(id) if id.repo_id() == 42));
        assert!(result.report().is_none());
    }

    #[test]
    fn test_url_entry_not_downloadable() {
        let mut store = InMemoryAttachmentStore::new();
        let id = store.add_url("site", "https://example.com").unwrap();

        let mut result = ProcessExecutionResult::new();
        let err = download(store).do_it(id.repo_id(), &mut result).unwrap_err();

        assert!(matches!(err, AttachmentError::NoData { .. }));
        assert!(result.report().is_none());
    }
}
