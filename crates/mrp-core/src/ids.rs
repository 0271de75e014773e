//! 生產規劃相關主鍵

use erp_core::repo_id_type;
use serde::{Deserialize, Serialize};

repo_id_type!(
    /// 產品規劃（PP_Product_Planning）
    ProductPlanningId, "PP_Product_Planning_ID"
);
repo_id_type!(
    /// BOM 表頭
    ProductBomId, "PP_Product_BOM_ID"
);
repo_id_type!(
    /// BOM 明細
    ProductBomLineId, "PP_Product_BOMLine_ID"
);
repo_id_type!(
    /// 製程路線（工作流程）
    PPRoutingId, "AD_Workflow_ID"
);
repo_id_type!(
    /// 銷售訂單明細
    OrderLineId, "C_OrderLine_ID"
);

/// 屬性集實例 ID
///
/// 與其他主鍵不同，`0` 是合法值，代表「無屬性」。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct AttributeSetInstanceId(i32);

impl AttributeSetInstanceId {
    /// 無屬性
    pub const NONE: AttributeSetInstanceId = AttributeSetInstanceId(0);

    /// 由原始主鍵建立，負數視為錯誤
    pub fn of_repo_id(repo_id: i32) -> Result<Self, erp_core::InvalidRepoIdError> {
        if repo_id >= 0 {
            Ok(Self(repo_id))
        } else {
            Err(erp_core::InvalidRepoIdError {
                column: "M_AttributeSetInstance_ID",
                value: repo_id,
            })
        }
    }

    /// 原始主鍵值
    pub fn repo_id(&self) -> i32 {
        self.0
    }

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<i32> for AttributeSetInstanceId {
    type Error = erp_core::InvalidRepoIdError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::of_repo_id(value)
    }
}

impl From<AttributeSetInstanceId> for i32 {
    fn from(id: AttributeSetInstanceId) -> Self {
        id.0
    }
}

impl std::fmt::Display for AttributeSetInstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
