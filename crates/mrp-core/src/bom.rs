//! BOM（物料清單）模型

use chrono::NaiveDate;
use erp_core::{ProductId, UomId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::{AttributeSetInstanceId, ProductBomId, ProductBomLineId};

/// BOM 元件類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BomComponentType {
    /// 一般元件
    #[serde(rename = "CO")]
    Component,
    /// 虛擬件
    #[serde(rename = "PH")]
    Phantom,
    /// 包材
    #[serde(rename = "PK")]
    Packing,
    /// 副產品
    #[serde(rename = "BY")]
    ByProduct,
    /// 聯產品
    #[serde(rename = "CP")]
    CoProduct,
    /// 變體
    #[serde(rename = "VA")]
    Variant,
    /// 選配件
    #[serde(rename = "OP")]
    Optional,
    /// 工具
    #[serde(rename = "TL")]
    Tools,
    /// 規劃用
    #[serde(rename = "PL")]
    Planning,
}

impl BomComponentType {
    /// 是否為收料（聯產品、副產品於生產時入庫）
    pub fn is_receipt(&self) -> bool {
        matches!(self, Self::CoProduct | Self::ByProduct)
    }
}

/// 有效期間判斷（兩端皆含）
fn is_valid_between(valid_from: Option<NaiveDate>, valid_to: Option<NaiveDate>, date: NaiveDate) -> bool {
    let after_start = valid_from.map_or(true, |from| date >= from);
    let before_end = valid_to.map_or(true, |to| date <= to);
    after_start && before_end
}

/// BOM 表頭
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductBom {
    /// BOM ID
    pub id: ProductBomId,

    /// 成品ID
    pub product_id: ProductId,

    /// 名稱
    pub name: String,

    /// 計量單位
    pub uom_id: UomId,

    /// 生效日期
    #[serde(default)]
    pub valid_from: Option<NaiveDate>,

    /// 失效日期
    #[serde(default)]
    pub valid_to: Option<NaiveDate>,
}

impl ProductBom {
    /// 創建新的 BOM
    pub fn new(id: ProductBomId, product_id: ProductId, name: impl Into<String>, uom_id: UomId) -> Self {
        Self {
            id,
            product_id,
            name: name.into(),
            uom_id,
            valid_from: None,
            valid_to: None,
        }
    }

    /// 建構器模式：設置有效期間
    pub fn with_validity(mut self, valid_from: Option<NaiveDate>, valid_to: Option<NaiveDate>) -> Self {
        self.valid_from = valid_from;
        self.valid_to = valid_to;
        self
    }

    /// 檢查在指定日期是否有效
    pub fn is_valid_at(&self, date: NaiveDate) -> bool {
        is_valid_between(self.valid_from, self.valid_to, date)
    }
}

/// BOM 明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductBomLine {
    /// BOM 明細ID
    pub id: ProductBomLineId,

    /// 所屬 BOM
    pub bom_id: ProductBomId,

    /// 行號
    pub line_no: u32,

    /// 元件產品
    pub product_id: ProductId,

    /// 計量單位
    pub uom_id: UomId,

    /// 說明
    #[serde(default)]
    pub description: Option<String>,

    /// 元件類型
    pub component_type: BomComponentType,

    /// 每單位成品用量
    #[serde(default)]
    pub qty_bom: Decimal,

    /// 百分比用量（`is_qty_percentage` 時使用）
    #[serde(default)]
    pub qty_batch: Decimal,

    /// 用量是否以百分比表示
    #[serde(default)]
    pub is_qty_percentage: bool,

    /// 損耗率（%）
    #[serde(default)]
    pub scrap: Decimal,

    /// 屬性集實例
    #[serde(default)]
    pub attribute_set_instance_id: AttributeSetInstanceId,

    /// 生效日期
    #[serde(default)]
    pub valid_from: Option<NaiveDate>,

    /// 失效日期
    #[serde(default)]
    pub valid_to: Option<NaiveDate>,
}

impl ProductBomLine {
    /// 創建新的 BOM 明細（一般元件）
    pub fn new(
        id: ProductBomLineId,
        bom_id: ProductBomId,
        line_no: u32,
        product_id: ProductId,
        uom_id: UomId,
        qty_bom: Decimal,
    ) -> Self {
        Self {
            id,
            bom_id,
            line_no,
            product_id,
            uom_id,
            description: None,
            component_type: BomComponentType::Component,
            qty_bom,
            qty_batch: Decimal::ZERO,
            is_qty_percentage: false,
            scrap: Decimal::ZERO,
            attribute_set_instance_id: AttributeSetInstanceId::NONE,
            valid_from: None,
            valid_to: None,
        }
    }

    /// 建構器模式：設置說明
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// 建構器模式：設置元件類型
    pub fn with_component_type(mut self, component_type: BomComponentType) -> Self {
        self.component_type = component_type;
        self
    }

    /// 建構器模式：改以百分比表示用量
    pub fn with_qty_percentage(mut self, qty_batch: Decimal) -> Self {
        self.is_qty_percentage = true;
        self.qty_batch = qty_batch;
        self
    }

    /// 建構器模式：設置損耗率（%）
    pub fn with_scrap(mut self, scrap: Decimal) -> Self {
        self.scrap = scrap;
        self
    }

    /// 建構器模式：設置屬性集實例
    pub fn with_attribute_set_instance_id(mut self, asi_id: AttributeSetInstanceId) -> Self {
        self.attribute_set_instance_id = asi_id;
        self
    }

    /// 建構器模式：設置有效期間
    pub fn with_validity(mut self, valid_from: Option<NaiveDate>, valid_to: Option<NaiveDate>) -> Self {
        self.valid_from = valid_from;
        self.valid_to = valid_to;
        self
    }

    /// 檢查在指定日期是否有效
    pub fn is_valid_at(&self, date: NaiveDate) -> bool {
        is_valid_between(self.valid_from, self.valid_to, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("CO", BomComponentType::Component, false)]
    #[case("PH", BomComponentType::Phantom, false)]
    #[case("PK", BomComponentType::Packing, false)]
    #[case("BY", BomComponentType::ByProduct, true)]
    #[case("CP", BomComponentType::CoProduct, true)]
    #[case("TL", BomComponentType::Tools, false)]
    fn test_component_type_codes(
        #[case] code: &str,
        #[case] expected: BomComponentType,
        #[case] receipt: bool,
    ) {
        let component_type: BomComponentType = serde_json::from_str(&format!("\"{}\"", code)).unwrap();
        assert_eq!(component_type, expected);
        assert_eq!(component_type.is_receipt(), receipt);
    }

    #[test]
    fn test_unknown_component_type() {
        assert!(serde_json::from_str::<BomComponentType>("\"XX\"").is_err());
    }

    #[test]
    fn test_component_type_serde_uses_codes() {
        let json = serde_json::to_string(&BomComponentType::CoProduct).unwrap();
        assert_eq!(json, "\"CP\"");

        let parsed: BomComponentType = serde_json::from_str("\"BY\"").unwrap();
        assert_eq!(parsed, BomComponentType::ByProduct);
    }

    #[test]
    fn test_line_validity_window() {
        let line = ProductBomLine::new(
            ProductBomLineId::of_repo_id(1).unwrap(),
            ProductBomId::of_repo_id(1).unwrap(),
            10,
            ProductId::of_repo_id(2).unwrap(),
            UomId::of_repo_id(3).unwrap(),
            Decimal::ONE,
        )
        .with_validity(Some(date(2024, 6, 1)), Some(date(2024, 6, 30)));

        assert!(!line.is_valid_at(date(2024, 5, 31)));
        assert!(line.is_valid_at(date(2024, 6, 1)));
        assert!(line.is_valid_at(date(2024, 6, 30)));
        assert!(!line.is_valid_at(date(2024, 7, 1)));
    }

    #[test]
    fn test_open_ended_validity() {
        let bom = ProductBom::new(
            ProductBomId::of_repo_id(1).unwrap(),
            ProductId::of_repo_id(2).unwrap(),
            "BIKE",
            UomId::of_repo_id(3).unwrap(),
        );
        assert!(bom.is_valid_at(date(1999, 1, 1)));

        let bom = bom.with_validity(Some(date(2024, 1, 1)), None);
        assert!(!bom.is_valid_at(date(2023, 12, 31)));
        assert!(bom.is_valid_at(date(2099, 1, 1)));
    }
}
