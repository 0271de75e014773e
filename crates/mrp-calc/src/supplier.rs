//! 生產工單推導
//!
//! 由物料需求推導生產工單表頭，再依 BOM 展開單層用料明細。

use std::sync::Arc;

use mrp_core::{
    MaterialRequest, MrpError, PPOrder, PPOrderLine, ProductBom, ProductBomLine, ProductPlanning,
    Result, WorkCalendar,
};

use crate::attributes;
use crate::bom::{verify_product_bom, BomQtyCalculator, DefaultBomQtyCalculator};
use crate::lead_time::{DefaultPlanningRules, LeadTimeCalculator, PlanningRules};
use crate::master_data::InMemoryMasterData;
use crate::repository::{AttributeSetInstanceRepository, ProductBomRepository, ProductPlanningRepository};
use crate::routing::{RoutingDurationCalculator, RoutingService};
use crate::uom::UomConversion;

/// 工單推導所需的協作服務
#[derive(Clone)]
pub struct PlanningServices {
    pub planning_rules: Arc<dyn PlanningRules>,
    pub routing_service: Arc<dyn RoutingService>,
    pub uom_conversion: Arc<dyn UomConversion>,
    pub product_plannings: Arc<dyn ProductPlanningRepository>,
    pub boms: Arc<dyn ProductBomRepository>,
    pub attribute_set_instances: Arc<dyn AttributeSetInstanceRepository>,
    pub bom_qty_calculator: Arc<dyn BomQtyCalculator>,
}

impl PlanningServices {
    /// 以記憶體主資料與預設規則組裝
    pub fn from_master_data(master_data: Arc<InMemoryMasterData>) -> Self {
        Self {
            planning_rules: Arc::new(DefaultPlanningRules),
            routing_service: Arc::new(RoutingDurationCalculator::new(master_data.clone())),
            uom_conversion: master_data.clone(),
            product_plannings: master_data.clone(),
            boms: master_data.clone(),
            attribute_set_instances: master_data,
            bom_qty_calculator: Arc::new(DefaultBomQtyCalculator),
        }
    }

    /// 建構器模式：替換製程路線服務
    pub fn with_routing_service(mut self, routing_service: Arc<dyn RoutingService>) -> Self {
        self.routing_service = routing_service;
        self
    }

    /// 建構器模式：替換規劃規則
    pub fn with_planning_rules(mut self, planning_rules: Arc<dyn PlanningRules>) -> Self {
        self.planning_rules = planning_rules;
        self
    }

    /// 建構器模式：替換用量計算
    pub fn with_bom_qty_calculator(mut self, bom_qty_calculator: Arc<dyn BomQtyCalculator>) -> Self {
        self.bom_qty_calculator = bom_qty_calculator;
        self
    }
}

/// 生產工單推導器
///
/// 不持有可變狀態，每次呼叫都產生新的工單。
pub struct PPOrderSupplier {
    services: PlanningServices,

    /// 往前推算開工日使用的日曆
    calendar: WorkCalendar,
}

impl PPOrderSupplier {
    /// 創建新的推導器（使用 24/7 日曆）
    pub fn new(services: PlanningServices) -> Self {
        Self {
            services,
            calendar: WorkCalendar::calendar_days(),
        }
    }

    /// 建構器模式：設置工作日曆
    pub fn with_calendar(mut self, calendar: WorkCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// 推導含用料明細的工單
    pub fn derive_order_with_lines(&self, request: &MaterialRequest) -> Result<PPOrder> {
        let pp_order = self.derive_header(request)?;
        let lines = self.derive_lines(&pp_order)?;

        tracing::info!(
            "工單推導完成: 產品 {}，數量 {}，用料明細 {} 筆",
            pp_order.product_descriptor.product_id,
            pp_order.qty_required,
            lines.len()
        );

        Ok(pp_order.with_lines(lines))
    }

    /// 推導工單表頭（不含明細）
    pub fn derive_header(&self, request: &MaterialRequest) -> Result<PPOrder> {
        let context = &request.context;

        if let Err(err) = context.assert_context_consistent() {
            tracing::warn!("規劃上下文不一致: {}", err);
            return Err(err);
        }

        let planning = &context.product_planning;
        let product = &context.product;

        // BOM
        if planning.bom_id.is_none() {
            return Err(MrpError::FillMandatory {
                field: "PP_Product_BOM_ID",
                product: product.value.clone(),
            });
        }

        // 製程路線
        if planning.workflow_id.is_none() {
            return Err(MrpError::FillMandatory {
                field: "AD_Workflow_ID",
                product: product.value.clone(),
            });
        }

        // 工期與排程日期
        let duration_days = self.calculate_duration_days(planning, request)?;
        let date_finish_schedule = request.demand_date;
        let date_start_schedule =
            LeadTimeCalculator::calculate_start_date(date_finish_schedule, duration_days, &self.calendar)?;

        tracing::debug!(
            "產品 {} 工期 {} 天: {} → {}",
            product.value,
            duration_days,
            date_start_schedule,
            date_finish_schedule
        );

        // 成品描述不採用產品規劃上的屬性，規劃記錄可能較不精確
        let product_descriptor = attributes::product_descriptor(
            self.services.attribute_set_instances.as_ref(),
            product.id,
            context.attribute_set_instance_id,
        );

        let qty_required = self
            .services
            .uom_conversion
            .convert_to_product_uom(&request.qty_to_supply, product.id)?;

        let pp_order = PPOrder::new(
            context.org_id,
            planning.id,
            product_descriptor,
            qty_required,
            date_finish_schedule,
            date_start_schedule,
        )
        .with_plant_id(context.plant_id)
        .with_warehouse_id(context.warehouse_id)
        .with_order_line_id(request.demand_order_line_id)
        .with_bpartner_id(request.demand_bpartner_id);

        tracing::info!(
            "工單表頭: 產品 {}，數量 {}，開工 {}，完工 {}",
            product.value,
            pp_order.qty_required,
            pp_order.date_start_schedule,
            pp_order.date_promised
        );

        Ok(pp_order)
    }

    /// 依 BOM 推導工單用料明細（保持 BOM 明細順序）
    pub fn derive_lines(&self, pp_order: &PPOrder) -> Result<Vec<PPOrderLine>> {
        let bom = self.retrieve_and_verify_bom(pp_order)?;
        let bom_lines = self.services.boms.retrieve_lines(&bom)?;

        let mut result = Vec::with_capacity(bom_lines.len());

        for bom_line in &bom_lines {
            if !bom_line.is_valid_at(pp_order.date_start_schedule) {
                tracing::debug!(
                    "BOM 明細略過（{} 不在有效期間 {:?} ~ {:?}）: {:?}",
                    pp_order.date_start_schedule,
                    bom_line.valid_from,
                    bom_line.valid_to,
                    bom_line
                );
                continue;
            }

            result.push(self.create_order_line(pp_order, bom_line)?);
        }

        Ok(result)
    }

    fn calculate_duration_days(&self, planning: &ProductPlanning, request: &MaterialRequest) -> Result<u32> {
        let calculator = LeadTimeCalculator::new(
            self.services.planning_rules.as_ref(),
            self.services.routing_service.as_ref(),
        );
        calculator.calculate_duration_days(planning, request.qty_to_supply.qty)
    }

    fn retrieve_and_verify_bom(&self, pp_order: &PPOrder) -> Result<ProductBom> {
        let planning = self
            .services
            .product_plannings
            .get_product_planning(pp_order.product_planning_id)?;

        let bom_id = planning.bom_id.ok_or_else(|| MrpError::FillMandatory {
            field: "PP_Product_BOM_ID",
            product: pp_order.product_descriptor.product_id.to_string(),
        })?;
        let bom = self.services.boms.get_bom(bom_id)?;

        verify_product_bom(
            pp_order.product_descriptor.product_id,
            pp_order.date_start_schedule,
            bom,
        )
    }

    /// 先計算需求量，再一次建立明細
    fn create_order_line(&self, pp_order: &PPOrder, bom_line: &ProductBomLine) -> Result<PPOrderLine> {
        let product_descriptor = attributes::product_descriptor_for_bom_line(
            self.services.attribute_set_instances.as_ref(),
            bom_line,
        );

        let receipt = bom_line.component_type.is_receipt();
        let issue_or_receive_date = if receipt {
            pp_order.date_promised
        } else {
            pp_order.date_start_schedule
        };

        let qty_required = self
            .services
            .bom_qty_calculator
            .calculate_qty_required(bom_line, &pp_order.qty_required)?;

        Ok(PPOrderLine::new(
            bom_line.id,
            bom_line.description.clone(),
            product_descriptor,
            receipt,
            issue_or_receive_date,
            qty_required,
        ))
    }
}
