//! 物料需求（工單推導的輸入）

use chrono::NaiveDate;
use erp_core::BPartnerId;
use serde::{Deserialize, Serialize};

use crate::context::PlanningContext;
use crate::ids::OrderLineId;
use crate::quantity::Quantity;

/// 物料需求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRequest {
    /// 規劃上下文
    pub context: PlanningContext,

    /// 需求日期（工單完工日）
    pub demand_date: NaiveDate,

    /// 需供應數量
    pub qty_to_supply: Quantity,

    /// 來源銷售訂單明細
    pub demand_order_line_id: Option<OrderLineId>,

    /// 需求方業務夥伴
    pub demand_bpartner_id: Option<BPartnerId>,
}

impl MaterialRequest {
    /// 創建新的物料需求
    pub fn new(context: PlanningContext, demand_date: NaiveDate, qty_to_supply: Quantity) -> Self {
        Self {
            context,
            demand_date,
            qty_to_supply,
            demand_order_line_id: None,
            demand_bpartner_id: None,
        }
    }

    /// 建構器模式：設置來源銷售訂單明細
    pub fn with_demand_order_line_id(mut self, order_line_id: OrderLineId) -> Self {
        self.demand_order_line_id = Some(order_line_id);
        self
    }

    /// 建構器模式：設置需求方業務夥伴
    pub fn with_demand_bpartner_id(mut self, bpartner_id: BPartnerId) -> Self {
        self.demand_bpartner_id = Some(bpartner_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductPlanningId;
    use crate::planning::ProductPlanning;
    use crate::product::Product;
    use erp_core::{OrgId, ProductId, UomId};
    use rust_decimal::Decimal;

    #[test]
    fn test_request_builder() {
        let product_id = ProductId::of_repo_id(10).unwrap();
        let uom = UomId::of_repo_id(1).unwrap();
        let context = PlanningContext::new(
            Product::new(product_id, "BIKE-001", "Bike", uom),
            OrgId::of_repo_id(1).unwrap(),
            ProductPlanning::new(ProductPlanningId::of_repo_id(2).unwrap(), product_id),
        );

        let request = MaterialRequest::new(
            context,
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            Quantity::new(Decimal::from(100), uom),
        );
        assert!(request.demand_order_line_id.is_none());

        let request = request
            .with_demand_order_line_id(OrderLineId::of_repo_id(77).unwrap())
            .with_demand_bpartner_id(BPartnerId::of_repo_id(88).unwrap());

        assert_eq!(request.demand_order_line_id.map(|id| id.repo_id()), Some(77));
        assert_eq!(request.demand_bpartner_id.map(|id| id.repo_id()), Some(88));
    }
}
