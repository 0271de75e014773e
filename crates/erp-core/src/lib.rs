//! # ERP Core
//!
//! 跨模組共用的資料庫主鍵類型

pub mod ids;

pub use ids::{BPartnerId, OrgId, ProductId, RepoIdAware, ResourceId, UomId, WarehouseId};

#[doc(hidden)]
pub use serde as __serde;

/// 主鍵轉換錯誤
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("無效的 {column}: {value}（必須大於 0）")]
pub struct InvalidRepoIdError {
    /// 欄位名稱（如 `M_Product_ID`）
    pub column: &'static str,
    /// 傳入的原始值
    pub value: i32,
}
