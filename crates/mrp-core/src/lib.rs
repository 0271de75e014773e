//! # MRP Core
//!
//! 生產工單推導所需的核心資料模型與類型定義

pub mod bom;
pub mod calendar;
pub mod context;
pub mod ids;
pub mod planning;
pub mod pp_order;
pub mod product;
pub mod quantity;
pub mod request;
pub mod routing;

// Re-export 主要類型
pub use bom::{BomComponentType, ProductBom, ProductBomLine};
pub use calendar::WorkCalendar;
pub use context::PlanningContext;
pub use erp_core::{BPartnerId, OrgId, ProductId, ResourceId, UomId, WarehouseId};
pub use ids::{
    AttributeSetInstanceId, OrderLineId, PPRoutingId, ProductBomId, ProductBomLineId,
    ProductPlanningId,
};
pub use planning::ProductPlanning;
pub use pp_order::{PPOrder, PPOrderLine};
pub use product::{AttributeInstance, AttributeSetInstance, AttributesKey, Product, ProductDescriptor};
pub use quantity::Quantity;
pub use request::MaterialRequest;
pub use routing::{DurationUnit, Plant, Routing, RoutingActivity};

use chrono::NaiveDate;

/// MRP 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum MrpError {
    #[error("必填欄位未設定: {field}（產品={product}）")]
    FillMandatory { field: &'static str, product: String },

    #[error("規劃上下文不一致: {0}")]
    InconsistentContext(String),

    #[error("找不到 {entity}: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("BOM {bom_id} 的產品 {bom_product_id} 與工單產品 {order_product_id} 不符")]
    BomProductMismatch {
        bom_id: ProductBomId,
        bom_product_id: ProductId,
        order_product_id: ProductId,
    },

    #[error("BOM {name} 於 {date} 無效（有效期間: {valid_from:?} ~ {valid_to:?}）")]
    BomNotValid {
        name: String,
        date: NaiveDate,
        valid_from: Option<NaiveDate>,
        valid_to: Option<NaiveDate>,
    },

    #[error("無法換算單位: {from_uom} → {to_uom}（產品={product_id}）")]
    UomConversion {
        product_id: ProductId,
        from_uom: UomId,
        to_uom: UomId,
    },

    #[error("無效的提前期: {0}")]
    InvalidLeadTime(String),

    #[error("無效的日期: {0}")]
    InvalidDate(String),

    #[error("計算錯誤: {0}")]
    CalculationError(String),

    #[error(transparent)]
    InvalidRepoId(#[from] erp_core::InvalidRepoIdError),

    #[error("主資料格式錯誤: {0}")]
    MasterData(#[from] serde_json::Error),
}

impl MrpError {
    /// 建立「找不到記錄」錯誤
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        MrpError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MrpError>;
