//! BOM 驗證與用量計算

use chrono::NaiveDate;
use erp_core::ProductId;
use mrp_core::{MrpError, ProductBom, ProductBomLine, Quantity, Result};
use rust_decimal::Decimal;

/// 檢查 BOM 可用於生產指定產品，並於指定日期有效
pub fn verify_product_bom(product_id: ProductId, date: NaiveDate, bom: ProductBom) -> Result<ProductBom> {
    if bom.product_id != product_id {
        return Err(MrpError::BomProductMismatch {
            bom_id: bom.id,
            bom_product_id: bom.product_id,
            order_product_id: product_id,
        });
    }

    if !bom.is_valid_at(date) {
        return Err(MrpError::BomNotValid {
            name: bom.name,
            date,
            valid_from: bom.valid_from,
            valid_to: bom.valid_to,
        });
    }

    Ok(bom)
}

/// BOM 元件需求量計算
pub trait BomQtyCalculator: Send + Sync {
    /// 依成品數量計算元件需求量（元件的 BOM 單位）
    fn calculate_qty_required(&self, line: &ProductBomLine, qty_finished_good: &Quantity) -> Result<Quantity>;
}

/// 預設用量計算
///
/// 需求量 = 成品數量 × 用量 × (1 + 損耗率 / 100)，
/// 百分比用量時以 `qty_batch / 100` 作為用量。
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBomQtyCalculator;

impl DefaultBomQtyCalculator {
    fn qty_multiplier(line: &ProductBomLine) -> Option<Decimal> {
        if line.is_qty_percentage {
            line.qty_batch.checked_div(Decimal::ONE_HUNDRED)
        } else {
            Some(line.qty_bom)
        }
    }
}

impl BomQtyCalculator for DefaultBomQtyCalculator {
    fn calculate_qty_required(&self, line: &ProductBomLine, qty_finished_good: &Quantity) -> Result<Quantity> {
        if line.scrap < Decimal::ZERO {
            return Err(MrpError::CalculationError(format!(
                "BOM 明細 {} 的損耗率不可為負: {}",
                line.id, line.scrap
            )));
        }

        let qty = Self::qty_multiplier(line).and_then(|multiplier| qty_finished_good.qty.checked_mul(multiplier));
        let qty_with_scrap = if line.scrap.is_zero() {
            qty
        } else {
            qty.and_then(|qty| {
                let scrap_factor = line
                    .scrap
                    .checked_div(Decimal::ONE_HUNDRED)
                    .and_then(|scrap| Decimal::ONE.checked_add(scrap))?;
                qty.checked_mul(scrap_factor)
            })
        };

        let qty_with_scrap = qty_with_scrap.ok_or_else(|| {
            MrpError::CalculationError(format!(
                "BOM 明細 {} 需求量溢出（成品數量 {}）",
                line.id, qty_finished_good.qty
            ))
        })?;

        Ok(Quantity::new(qty_with_scrap, line.uom_id))
    }
}
