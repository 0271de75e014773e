//! 主資料存取介面

use erp_core::ResourceId;
use mrp_core::{
    AttributeSetInstance, AttributeSetInstanceId, PPRoutingId, Plant, ProductBom,
    ProductBomId, ProductBomLine, ProductPlanning, ProductPlanningId, Result, Routing,
};

/// 產品規劃
pub trait ProductPlanningRepository: Send + Sync {
    fn get_product_planning(&self, id: ProductPlanningId) -> Result<ProductPlanning>;
}

/// BOM
pub trait ProductBomRepository: Send + Sync {
    fn get_bom(&self, id: ProductBomId) -> Result<ProductBom>;

    /// BOM 明細，依行號排序
    fn retrieve_lines(&self, bom: &ProductBom) -> Result<Vec<ProductBomLine>>;
}

/// 製程路線與工廠
pub trait RoutingRepository: Send + Sync {
    fn get_routing(&self, id: PPRoutingId) -> Result<Routing>;

    fn get_plant(&self, id: ResourceId) -> Result<Plant>;
}

/// 屬性集實例
pub trait AttributeSetInstanceRepository: Send + Sync {
    /// 找不到時回傳 `None`
    fn find_attribute_set_instance(&self, id: AttributeSetInstanceId) -> Option<AttributeSetInstance>;
}
