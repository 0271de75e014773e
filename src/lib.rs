//! # ERP
//!
//! 生產工單推導、附件下載、訂單候選與查詢過濾的統一入口

pub use erp_attachment as attachment;
pub use erp_core as ids;
pub use erp_ordercandidate as ordercandidate;
pub use erp_query as query;
pub use mrp_calc as calc;
pub use mrp_core as mrp;
