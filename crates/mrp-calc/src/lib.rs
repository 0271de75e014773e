//! # MRP Calculation Engine
//!
//! 生產工單推導引擎：交期、BOM 展開、單位換算與主資料存取

pub mod attributes;
pub mod bom;
pub mod lead_time;
pub mod master_data;
pub mod repository;
pub mod routing;
pub mod supplier;
pub mod uom;

// Re-export 主要類型
pub use bom::{verify_product_bom, BomQtyCalculator, DefaultBomQtyCalculator};
pub use lead_time::{DefaultPlanningRules, LeadTimeCalculator, PlanningRules};
pub use master_data::{InMemoryMasterData, MasterDataSnapshot};
pub use repository::{
    AttributeSetInstanceRepository, ProductBomRepository, ProductPlanningRepository,
    RoutingRepository,
};
pub use routing::{RoutingDurationCalculator, RoutingService};
pub use supplier::{PPOrderSupplier, PlanningServices};
pub use uom::{UomConversion, UomConversionRate, UomConversionTable};
