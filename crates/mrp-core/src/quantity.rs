//! 數量（數值 + 計量單位）

use erp_core::UomId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 帶計量單位的數量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity {
    /// 數值
    pub qty: Decimal,

    /// 計量單位
    pub uom_id: UomId,
}

impl Quantity {
    /// 創建新的數量
    pub fn new(qty: Decimal, uom_id: UomId) -> Self {
        Self { qty, uom_id }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (C_UOM_ID={})", self.qty, self.uom_id)
    }
}
