//! 生產工單模型（工單推導結果）

use chrono::NaiveDate;
use erp_core::{BPartnerId, OrgId, ResourceId, WarehouseId};
use serde::{Deserialize, Serialize};

use crate::ids::{OrderLineId, ProductBomLineId, ProductPlanningId};
use crate::product::ProductDescriptor;
use crate::quantity::Quantity;

/// 生產工單表頭
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PPOrder {
    /// 組織
    pub org_id: OrgId,

    /// 工廠
    pub plant_id: Option<ResourceId>,

    /// 倉庫
    pub warehouse_id: Option<WarehouseId>,

    /// 產品規劃
    pub product_planning_id: ProductPlanningId,

    /// 成品描述
    pub product_descriptor: ProductDescriptor,

    /// 承諾完工日期
    pub date_promised: NaiveDate,

    /// 排程開工日期
    pub date_start_schedule: NaiveDate,

    /// 需求數量（成品庫存單位）
    pub qty_required: Quantity,

    /// 來源銷售訂單明細
    pub order_line_id: Option<OrderLineId>,

    /// 需求方業務夥伴
    pub bpartner_id: Option<BPartnerId>,

    /// 工單用料明細（依 BOM 順序）
    pub lines: Vec<PPOrderLine>,
}

impl PPOrder {
    /// 創建新的工單表頭（無明細）
    pub fn new(
        org_id: OrgId,
        product_planning_id: ProductPlanningId,
        product_descriptor: ProductDescriptor,
        qty_required: Quantity,
        date_promised: NaiveDate,
        date_start_schedule: NaiveDate,
    ) -> Self {
        Self {
            org_id,
            plant_id: None,
            warehouse_id: None,
            product_planning_id,
            product_descriptor,
            date_promised,
            date_start_schedule,
            qty_required,
            order_line_id: None,
            bpartner_id: None,
            lines: Vec::new(),
        }
    }

    /// 建構器模式：設置工廠
    pub fn with_plant_id(mut self, plant_id: Option<ResourceId>) -> Self {
        self.plant_id = plant_id;
        self
    }

    /// 建構器模式：設置倉庫
    pub fn with_warehouse_id(mut self, warehouse_id: Option<WarehouseId>) -> Self {
        self.warehouse_id = warehouse_id;
        self
    }

    /// 建構器模式：設置來源銷售訂單明細
    pub fn with_order_line_id(mut self, order_line_id: Option<OrderLineId>) -> Self {
        self.order_line_id = order_line_id;
        self
    }

    /// 建構器模式：設置業務夥伴
    pub fn with_bpartner_id(mut self, bpartner_id: Option<BPartnerId>) -> Self {
        self.bpartner_id = bpartner_id;
        self
    }

    /// 建構器模式：附上用料明細
    pub fn with_lines(mut self, lines: Vec<PPOrderLine>) -> Self {
        self.lines = lines;
        self
    }

    /// 生產天數（開工到完工）
    pub fn duration_days(&self) -> i64 {
        (self.date_promised - self.date_start_schedule).num_days()
    }

    /// 發料明細
    pub fn issue_lines(&self) -> impl Iterator<Item = &PPOrderLine> {
        self.lines.iter().filter(|l| !l.receipt)
    }

    /// 收料明細（聯產品、副產品）
    pub fn receipt_lines(&self) -> impl Iterator<Item = &PPOrderLine> {
        self.lines.iter().filter(|l| l.receipt)
    }
}

/// 生產工單用料明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PPOrderLine {
    /// 來源 BOM 明細
    pub product_bom_line_id: ProductBomLineId,

    /// 說明
    pub description: Option<String>,

    /// 元件描述
    pub product_descriptor: ProductDescriptor,

    /// 是否為收料（否則為發料）
    pub receipt: bool,

    /// 發料或收料日期
    pub issue_or_receive_date: NaiveDate,

    /// 需求數量
    pub qty_required: Quantity,
}

impl PPOrderLine {
    /// 創建工單明細
    pub fn new(
        product_bom_line_id: ProductBomLineId,
        description: Option<String>,
        product_descriptor: ProductDescriptor,
        receipt: bool,
        issue_or_receive_date: NaiveDate,
        qty_required: Quantity,
    ) -> Self {
        Self {
            product_bom_line_id,
            description,
            product_descriptor,
            receipt,
            issue_or_receive_date,
            qty_required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::AttributeSetInstanceId;
    use crate::product::AttributesKey;
    use erp_core::{ProductId, UomId};
    use rust_decimal::Decimal;

    fn descriptor(product_id: i32) -> ProductDescriptor {
        ProductDescriptor::for_product_and_attributes(
            ProductId::of_repo_id(product_id).unwrap(),
            AttributesKey::none(),
            AttributeSetInstanceId::NONE,
        )
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn line(id: i32, receipt: bool) -> PPOrderLine {
        PPOrderLine::new(
            ProductBomLineId::of_repo_id(id).unwrap(),
            None,
            descriptor(100 + id),
            receipt,
            if receipt { date(10) } else { date(7) },
            Quantity::new(Decimal::from(2), UomId::of_repo_id(1).unwrap()),
        )
    }

    #[test]
    fn test_create_pp_order() {
        let order = PPOrder::new(
            OrgId::of_repo_id(1).unwrap(),
            ProductPlanningId::of_repo_id(2).unwrap(),
            descriptor(10),
            Quantity::new(Decimal::from(100), UomId::of_repo_id(1).unwrap()),
            date(10),
            date(7),
        );

        assert_eq!(order.duration_days(), 3);
        assert!(order.lines.is_empty());
        assert_eq!(order.plant_id, None);
    }

    #[test]
    fn test_with_lines_splits_issue_and_receipt() {
        let order = PPOrder::new(
            OrgId::of_repo_id(1).unwrap(),
            ProductPlanningId::of_repo_id(2).unwrap(),
            descriptor(10),
            Quantity::new(Decimal::from(100), UomId::of_repo_id(1).unwrap()),
            date(10),
            date(7),
        )
        .with_lines(vec![line(1, false), line(2, true), line(3, false)]);

        let issues: Vec<i32> = order
            .issue_lines()
            .map(|l| l.product_bom_line_id.repo_id())
            .collect();
        assert_eq!(issues, vec![1, 3]);
        assert_eq!(order.receipt_lines().count(), 1);
    }
}
