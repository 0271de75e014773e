//! 記憶體主資料
//!
//! 以 JSON 快照載入產品、產品規劃、BOM、製程路線、工廠、屬性集實例與單位換算，
//! 並實作所有主資料存取介面。

use std::collections::HashMap;

use erp_core::{ProductId, ResourceId};
use mrp_core::{
    AttributeSetInstance, AttributeSetInstanceId, MrpError, PPRoutingId, Plant, Product,
    ProductBom, ProductBomId, ProductBomLine, ProductPlanning, ProductPlanningId, Quantity,
    Result, Routing,
};
use serde::{Deserialize, Serialize};

use crate::repository::{
    AttributeSetInstanceRepository, ProductBomRepository, ProductPlanningRepository,
    RoutingRepository,
};
use crate::uom::{UomConversion, UomConversionRate, UomConversionTable};

/// 主資料快照（JSON 格式）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MasterDataSnapshot {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub product_plannings: Vec<ProductPlanning>,
    #[serde(default)]
    pub boms: Vec<ProductBom>,
    #[serde(default)]
    pub bom_lines: Vec<ProductBomLine>,
    #[serde(default)]
    pub routings: Vec<Routing>,
    #[serde(default)]
    pub plants: Vec<Plant>,
    #[serde(default)]
    pub attribute_set_instances: Vec<AttributeSetInstance>,
    #[serde(default)]
    pub uom_conversions: Vec<UomConversionRate>,
}

/// 記憶體主資料
#[derive(Debug, Clone, Default)]
pub struct InMemoryMasterData {
    products: HashMap<ProductId, Product>,
    product_plannings: HashMap<ProductPlanningId, ProductPlanning>,
    boms: HashMap<ProductBomId, ProductBom>,
    bom_lines: HashMap<ProductBomId, Vec<ProductBomLine>>,
    routings: HashMap<PPRoutingId, Routing>,
    plants: HashMap<ResourceId, Plant>,
    attribute_set_instances: HashMap<AttributeSetInstanceId, AttributeSetInstance>,
    uom_conversions: UomConversionTable,
}

impl InMemoryMasterData {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由快照建立
    pub fn from_snapshot(snapshot: MasterDataSnapshot) -> Self {
        let mut data = Self::new();
        snapshot.products.into_iter().for_each(|p| data.add_product(p));
        snapshot
            .product_plannings
            .into_iter()
            .for_each(|p| data.add_product_planning(p));
        snapshot.boms.into_iter().for_each(|b| data.add_bom(b));
        snapshot.bom_lines.into_iter().for_each(|l| data.add_bom_line(l));
        snapshot.routings.into_iter().for_each(|r| data.add_routing(r));
        snapshot.plants.into_iter().for_each(|p| data.add_plant(p));
        snapshot
            .attribute_set_instances
            .into_iter()
            .for_each(|asi| data.add_attribute_set_instance(asi));
        snapshot
            .uom_conversions
            .into_iter()
            .for_each(|r| data.add_uom_conversion(r));

        tracing::debug!(
            "主資料載入完成：產品 {} 筆，產品規劃 {} 筆，BOM {} 筆",
            data.products.len(),
            data.product_plannings.len(),
            data.boms.len()
        );
        data
    }

    /// 由 JSON 字串載入
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: MasterDataSnapshot = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn add_product(&mut self, product: Product) {
        self.uom_conversions
            .register_product_uom(product.id, product.uom_id);
        self.products.insert(product.id, product);
    }

    pub fn add_product_planning(&mut self, planning: ProductPlanning) {
        self.product_plannings.insert(planning.id, planning);
    }

    pub fn add_bom(&mut self, bom: ProductBom) {
        self.boms.insert(bom.id, bom);
    }

    pub fn add_bom_line(&mut self, line: ProductBomLine) {
        self.bom_lines.entry(line.bom_id).or_default().push(line);
    }

    pub fn add_routing(&mut self, routing: Routing) {
        self.routings.insert(routing.id, routing);
    }

    pub fn add_plant(&mut self, plant: Plant) {
        self.plants.insert(plant.id, plant);
    }

    pub fn add_attribute_set_instance(&mut self, asi: AttributeSetInstance) {
        self.attribute_set_instances.insert(asi.id, asi);
    }

    pub fn add_uom_conversion(&mut self, rate: UomConversionRate) {
        self.uom_conversions.add_rate(rate);
    }

    /// 產品主檔
    pub fn get_product(&self, id: ProductId) -> Result<Product> {
        self.products
            .get(&id)
            .cloned()
            .ok_or_else(|| MrpError::not_found("M_Product", id))
    }
}

impl ProductPlanningRepository for InMemoryMasterData {
    fn get_product_planning(&self, id: ProductPlanningId) -> Result<ProductPlanning> {
        self.product_plannings
            .get(&id)
            .cloned()
            .ok_or_else(|| MrpError::not_found("PP_Product_Planning", id))
    }
}

impl ProductBomRepository for InMemoryMasterData {
    fn get_bom(&self, id: ProductBomId) -> Result<ProductBom> {
        self.boms
            .get(&id)
            .cloned()
            .ok_or_else(|| MrpError::not_found("PP_Product_BOM", id))
    }

    fn retrieve_lines(&self, bom: &ProductBom) -> Result<Vec<ProductBomLine>> {
        let mut lines = self.bom_lines.get(&bom.id).cloned().unwrap_or_default();
        lines.sort_by_key(|l| (l.line_no, l.id));
        Ok(lines)
    }
}

impl RoutingRepository for InMemoryMasterData {
    fn get_routing(&self, id: PPRoutingId) -> Result<Routing> {
        self.routings
            .get(&id)
            .cloned()
            .ok_or_else(|| MrpError::not_found("AD_Workflow", id))
    }

    fn get_plant(&self, id: ResourceId) -> Result<Plant> {
        self.plants
            .get(&id)
            .cloned()
            .ok_or_else(|| MrpError::not_found("S_Resource", id))
    }
}

impl AttributeSetInstanceRepository for InMemoryMasterData {
    fn find_attribute_set_instance(&self, id: AttributeSetInstanceId) -> Option<AttributeSetInstance> {
        self.attribute_set_instances.get(&id).cloned()
    }
}

impl UomConversion for InMemoryMasterData {
    fn convert_to_product_uom(&self, qty: &Quantity, product_id: ProductId) -> Result<Quantity> {
        self.uom_conversions.convert_to_product_uom(qty, product_id)
    }
}
