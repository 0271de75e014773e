//! 產品規劃（PP_Product_Planning）配置

use erp_core::{OrgId, ProductId, ResourceId, WarehouseId};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::{PPRoutingId, ProductBomId, ProductPlanningId};
use crate::{MrpError, Result};

/// 物料的產品規劃參數
///
/// 規劃維度（組織、倉庫、工廠）為 `None` 時表示適用於任何值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPlanning {
    /// 產品規劃ID
    pub id: ProductPlanningId,

    /// 產品ID
    pub product_id: ProductId,

    /// 組織
    #[serde(default)]
    pub org_id: Option<OrgId>,

    /// 倉庫
    #[serde(default)]
    pub warehouse_id: Option<WarehouseId>,

    /// 工廠（資源）
    #[serde(default)]
    pub plant_id: Option<ResourceId>,

    /// 生產用 BOM（PP_Product_BOM_ID）
    #[serde(default)]
    pub bom_id: Option<ProductBomId>,

    /// 製程路線（AD_Workflow_ID）
    #[serde(default)]
    pub workflow_id: Option<PPRoutingId>,

    /// 承諾交期（天）；大於 0 時優先於製程路線計算
    #[serde(default)]
    pub delivery_time_promised: Decimal,

    /// 移轉時間（天）
    #[serde(default)]
    pub transfer_time: Decimal,
}

impl ProductPlanning {
    /// 創建新的產品規劃
    pub fn new(id: ProductPlanningId, product_id: ProductId) -> Self {
        Self {
            id,
            product_id,
            org_id: None,
            warehouse_id: None,
            plant_id: None,
            bom_id: None,
            workflow_id: None,
            delivery_time_promised: Decimal::ZERO,
            transfer_time: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置組織
    pub fn with_org_id(mut self, org_id: OrgId) -> Self {
        self.org_id = Some(org_id);
        self
    }

    /// 建構器模式：設置倉庫
    pub fn with_warehouse_id(mut self, warehouse_id: WarehouseId) -> Self {
        self.warehouse_id = Some(warehouse_id);
        self
    }

    /// 建構器模式：設置工廠
    pub fn with_plant_id(mut self, plant_id: ResourceId) -> Self {
        self.plant_id = Some(plant_id);
        self
    }

    /// 建構器模式：設置 BOM
    pub fn with_bom_id(mut self, bom_id: ProductBomId) -> Self {
        self.bom_id = Some(bom_id);
        self
    }

    /// 建構器模式：設置製程路線
    pub fn with_workflow_id(mut self, workflow_id: PPRoutingId) -> Self {
        self.workflow_id = Some(workflow_id);
        self
    }

    /// 建構器模式：設置承諾交期（天）
    pub fn with_delivery_time_promised(mut self, days: Decimal) -> Self {
        self.delivery_time_promised = days;
        self
    }

    /// 建構器模式：設置移轉時間（天）
    pub fn with_transfer_time(mut self, days: Decimal) -> Self {
        self.transfer_time = days;
        self
    }

    /// 承諾交期的整數天數
    ///
    /// 非整數天數視為錯誤；負值原樣返回，由呼叫端決定如何處理。
    pub fn delivery_time_promised_days(&self) -> Result<i64> {
        exact_days("DeliveryTime_Promised", self.delivery_time_promised)
    }

    /// 移轉時間的整數天數
    pub fn transfer_time_days(&self) -> Result<i64> {
        exact_days("TransfertTime", self.transfer_time)
    }
}

fn exact_days(field: &str, value: Decimal) -> Result<i64> {
    if !value.fract().is_zero() {
        return Err(MrpError::InvalidLeadTime(format!(
            "{} 必須為整數天數: {}",
            field, value
        )));
    }

    value
        .trunc()
        .to_i64()
        .ok_or_else(|| MrpError::InvalidLeadTime(format!("{} 超出範圍: {}", field, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planning() -> ProductPlanning {
        ProductPlanning::new(
            ProductPlanningId::of_repo_id(1).unwrap(),
            ProductId::of_repo_id(10).unwrap(),
        )
    }

    #[test]
    fn test_create_planning() {
        let planning = planning();

        assert_eq!(planning.bom_id, None);
        assert_eq!(planning.workflow_id, None);
        assert_eq!(planning.delivery_time_promised, Decimal::ZERO);
        assert_eq!(planning.delivery_time_promised_days().unwrap(), 0);
    }

    #[test]
    fn test_planning_builder() {
        let planning = planning()
            .with_bom_id(ProductBomId::of_repo_id(20).unwrap())
            .with_workflow_id(PPRoutingId::of_repo_id(30).unwrap())
            .with_plant_id(ResourceId::of_repo_id(40).unwrap())
            .with_delivery_time_promised(Decimal::from(5))
            .with_transfer_time(Decimal::from(2));

        assert_eq!(planning.bom_id.map(|id| id.repo_id()), Some(20));
        assert_eq!(planning.workflow_id.map(|id| id.repo_id()), Some(30));
        assert_eq!(planning.plant_id.map(|id| id.repo_id()), Some(40));
        assert_eq!(planning.delivery_time_promised_days().unwrap(), 5);
        assert_eq!(planning.transfer_time_days().unwrap(), 2);
    }

    #[test]
    fn test_fractional_days_rejected() {
        let planning = planning().with_delivery_time_promised(Decimal::new(25, 1));

        assert!(matches!(
            planning.delivery_time_promised_days(),
            Err(MrpError::InvalidLeadTime(_))
        ));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let planning: ProductPlanning =
            serde_json::from_str(r#"{ "id": 1, "product_id": 10, "bom_id": 20 }"#).unwrap();

        assert_eq!(planning.bom_id.map(|id| id.repo_id()), Some(20));
        assert_eq!(planning.workflow_id, None);
        assert_eq!(planning.transfer_time, Decimal::ZERO);
    }
}
