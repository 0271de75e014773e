//! 物料規劃上下文

use erp_core::{OrgId, ProductId, ResourceId, WarehouseId};
use serde::{Deserialize, Serialize};

use crate::ids::AttributeSetInstanceId;
use crate::planning::ProductPlanning;
use crate::product::Product;
use crate::{MrpError, Result};

/// 單次規劃請求的上下文：產品、組織、工廠、倉庫、屬性集實例以及產品規劃記錄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningContext {
    pub product: Product,
    pub org_id: OrgId,
    pub plant_id: Option<ResourceId>,
    pub warehouse_id: Option<WarehouseId>,
    pub attribute_set_instance_id: AttributeSetInstanceId,
    pub product_planning: ProductPlanning,
}

impl PlanningContext {
    /// 創建新的規劃上下文
    pub fn new(product: Product, org_id: OrgId, product_planning: ProductPlanning) -> Self {
        Self {
            product,
            org_id,
            plant_id: None,
            warehouse_id: None,
            attribute_set_instance_id: AttributeSetInstanceId::NONE,
            product_planning,
        }
    }

    /// 建構器模式：設置工廠
    pub fn with_plant_id(mut self, plant_id: ResourceId) -> Self {
        self.plant_id = Some(plant_id);
        self
    }

    /// 建構器模式：設置倉庫
    pub fn with_warehouse_id(mut self, warehouse_id: WarehouseId) -> Self {
        self.warehouse_id = Some(warehouse_id);
        self
    }

    /// 建構器模式：設置屬性集實例
    pub fn with_attribute_set_instance_id(mut self, asi_id: AttributeSetInstanceId) -> Self {
        self.attribute_set_instance_id = asi_id;
        self
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// 檢查產品規劃記錄是否屬於本上下文
    ///
    /// 產品必須一致；規劃記錄上有設定的組織、倉庫、工廠也必須與上下文相同。
    pub fn assert_context_consistent(&self) -> Result<()> {
        let planning = &self.product_planning;

        if planning.product_id != self.product.id {
            return Err(MrpError::InconsistentContext(format!(
                "上下文產品 M_Product_ID={}，但產品規劃 {} 的 M_Product_ID={}",
                self.product.id, planning.id, planning.product_id
            )));
        }

        if let Some(org_id) = planning.org_id {
            if org_id != self.org_id {
                return Err(MrpError::InconsistentContext(format!(
                    "上下文 AD_Org_ID={}，但產品規劃 {} 的 AD_Org_ID={}",
                    self.org_id, planning.id, org_id
                )));
            }
        }

        if let Some(warehouse_id) = planning.warehouse_id {
            if Some(warehouse_id) != self.warehouse_id {
                return Err(MrpError::InconsistentContext(format!(
                    "上下文 M_Warehouse_ID={}，但產品規劃 {} 的 M_Warehouse_ID={}",
                    WarehouseId::to_repo_id(self.warehouse_id),
                    planning.id,
                    warehouse_id
                )));
            }
        }

        if let Some(plant_id) = planning.plant_id {
            if Some(plant_id) != self.plant_id {
                return Err(MrpError::InconsistentContext(format!(
                    "上下文 S_Resource_ID={}，但產品規劃 {} 的 S_Resource_ID={}",
                    ResourceId::to_repo_id(self.plant_id),
                    planning.id,
                    plant_id
                )));
            }
        }

        Ok(())
    }
}
