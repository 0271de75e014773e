//! 計量單位換算

use std::collections::HashMap;

use erp_core::{ProductId, UomId};
use mrp_core::{MrpError, Quantity, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 將數量換算為產品的庫存單位
pub trait UomConversion: Send + Sync {
    fn convert_to_product_uom(&self, qty: &Quantity, product_id: ProductId) -> Result<Quantity>;
}

/// 單位換算率：`to = from × multiply_rate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UomConversionRate {
    /// 僅適用於指定產品；`None` 為通用換算
    #[serde(default)]
    pub product_id: Option<ProductId>,
    pub from_uom_id: UomId,
    pub to_uom_id: UomId,
    pub multiply_rate: Decimal,
}

impl UomConversionRate {
    /// 通用換算率
    pub fn generic(from_uom_id: UomId, to_uom_id: UomId, multiply_rate: Decimal) -> Self {
        Self {
            product_id: None,
            from_uom_id,
            to_uom_id,
            multiply_rate,
        }
    }

    /// 產品專用換算率
    pub fn for_product(
        product_id: ProductId,
        from_uom_id: UomId,
        to_uom_id: UomId,
        multiply_rate: Decimal,
    ) -> Self {
        Self {
            product_id: Some(product_id),
            from_uom_id,
            to_uom_id,
            multiply_rate,
        }
    }
}

/// 換算表
///
/// 查找順序：產品專用換算率 → 通用換算率 → 反向換算率（除以換算率）。
#[derive(Debug, Clone, Default)]
pub struct UomConversionTable {
    product_uoms: HashMap<ProductId, UomId>,
    rates: Vec<UomConversionRate>,
}

impl UomConversionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登記產品的庫存單位
    pub fn register_product_uom(&mut self, product_id: ProductId, uom_id: UomId) {
        self.product_uoms.insert(product_id, uom_id);
    }

    /// 添加換算率
    pub fn add_rate(&mut self, rate: UomConversionRate) {
        self.rates.push(rate);
    }

    /// 在指定產品下將數量換算為目標單位
    pub fn convert(&self, qty: &Quantity, product_id: ProductId, to_uom_id: UomId) -> Result<Quantity> {
        if qty.uom_id == to_uom_id {
            return Ok(*qty);
        }

        let overflow = || {
            MrpError::CalculationError(format!(
                "產品 {} 數量 {} 由單位 {} 換算至 {} 時溢出",
                product_id, qty.qty, qty.uom_id, to_uom_id
            ))
        };

        if let Some(rate) = self.find_rate(product_id, qty.uom_id, to_uom_id) {
            let converted = qty.qty.checked_mul(rate).ok_or_else(overflow)?;
            return Ok(Quantity::new(converted, to_uom_id));
        }

        if let Some(rate) = self.find_rate(product_id, to_uom_id, qty.uom_id) {
            if !rate.is_zero() {
                let converted = qty.qty.checked_div(rate).ok_or_else(overflow)?;
                return Ok(Quantity::new(converted, to_uom_id));
            }
        }

        Err(MrpError::UomConversion {
            product_id,
            from_uom: qty.uom_id,
            to_uom: to_uom_id,
        })
    }

    fn find_rate(&self, product_id: ProductId, from: UomId, to: UomId) -> Option<Decimal> {
        let matches = |r: &&UomConversionRate| r.from_uom_id == from && r.to_uom_id == to;

        self.rates
            .iter()
            .filter(matches)
            .find(|r| r.product_id == Some(product_id))
            .or_else(|| self.rates.iter().filter(matches).find(|r| r.product_id.is_none()))
            .map(|r| r.multiply_rate)
    }
}

impl UomConversion for UomConversionTable {
    fn convert_to_product_uom(&self, qty: &Quantity, product_id: ProductId) -> Result<Quantity> {
        let product_uom = self
            .product_uoms
            .get(&product_id)
            .copied()
            .ok_or_else(|| MrpError::not_found("M_Product", product_id))?;

        self.convert(qty, product_id, product_uom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PCE: i32 = 100;
    const DOZEN: i32 = 101;
    const KG: i32 = 102;

    fn uom(id: i32) -> UomId {
        UomId::of_repo_id(id).unwrap()
    }

    fn product(id: i32) -> ProductId {
        ProductId::of_repo_id(id).unwrap()
    }

    fn table() -> UomConversionTable {
        let mut table = UomConversionTable::new();
        table.register_product_uom(product(1), uom(PCE));
        table.register_product_uom(product(2), uom(PCE));
        table.add_rate(UomConversionRate::generic(uom(DOZEN), uom(PCE), Decimal::from(12)));
        table.add_rate(UomConversionRate::for_product(
            product(2),
            uom(DOZEN),
            uom(PCE),
            Decimal::from(10),
        ));
        table
    }

    #[test]
    fn test_same_uom_is_unchanged() {
        let qty = Quantity::new(Decimal::from(7), uom(PCE));
        assert_eq!(table().convert_to_product_uom(&qty, product(1)).unwrap(), qty);
    }

    #[test]
    fn test_generic_rate() {
        let qty = Quantity::new(Decimal::from(3), uom(DOZEN));
        let converted = table().convert_to_product_uom(&qty, product(1)).unwrap();
        assert_eq!(converted, Quantity::new(Decimal::from(36), uom(PCE)));
    }

    #[test]
    fn test_product_rate_takes_precedence() {
        let qty = Quantity::new(Decimal::from(3), uom(DOZEN));
        let converted = table().convert_to_product_uom(&qty, product(2)).unwrap();
        assert_eq!(converted.qty, Decimal::from(30));
    }

    #[test]
    fn test_inverse_rate() {
        let qty = Quantity::new(Decimal::from(24), uom(PCE));
        let converted = table().convert(&qty, product(1), uom(DOZEN)).unwrap();
        assert_eq!(converted, Quantity::new(Decimal::from(2), uom(DOZEN)));
    }

    #[test]
    fn test_missing_rate() {
        let qty = Quantity::new(Decimal::ONE, uom(KG));
        assert!(matches!(
            table().convert_to_product_uom(&qty, product(1)),
            Err(MrpError::UomConversion { .. })
        ));
    }

    #[test]
    fn test_unknown_product() {
        let qty = Quantity::new(Decimal::ONE, uom(PCE));
        assert!(matches!(
            table().convert_to_product_uom(&qty, product(99)),
            Err(MrpError::NotFound { entity: "M_Product", .. })
        ));
    }

    #[test]
    fn test_overflowing_rate_is_error() {
        let qty = Quantity::new(Decimal::MAX, uom(DOZEN));
        assert!(matches!(
            table().convert_to_product_uom(&qty, product(1)),
            Err(MrpError::CalculationError(_))
        ));
    }

    #[test]
    fn test_overflowing_inverse_rate_is_error() {
        let mut table = table();
        table.add_rate(UomConversionRate::generic(uom(KG), uom(PCE), Decimal::new(1, 20)));

        let qty = Quantity::new(Decimal::MAX, uom(PCE));
        assert!(matches!(
            table.convert(&qty, product(1), uom(KG)),
            Err(MrpError::CalculationError(_))
        ));
    }
}
