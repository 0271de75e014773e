//! 產品、屬性集實例與產品描述

use erp_core::{ProductId, UomId};
use serde::{Deserialize, Serialize};

use crate::ids::AttributeSetInstanceId;

/// 產品主檔
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// 產品ID
    pub id: ProductId,

    /// 搜尋鍵（料號）
    pub value: String,

    /// 名稱
    pub name: String,

    /// 庫存計量單位
    pub uom_id: UomId,
}

impl Product {
    /// 創建新的產品
    pub fn new(id: ProductId, value: impl Into<String>, name: impl Into<String>, uom_id: UomId) -> Self {
        Self {
            id,
            value: value.into(),
            name: name.into(),
            uom_id,
        }
    }
}

/// 屬性實例（屬性集實例中的單一屬性值）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeInstance {
    /// 屬性ID
    pub attribute_id: i32,

    /// 清單型屬性的值ID（自由輸入型屬性為 None）
    pub attribute_value_id: Option<i32>,

    /// 是否影響庫存區分（批號、尺寸等）
    pub storage_relevant: bool,
}

/// 屬性集實例（ASI）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSetInstance {
    pub id: AttributeSetInstanceId,
    pub attributes: Vec<AttributeInstance>,
}

impl AttributeSetInstance {
    /// 創建新的屬性集實例
    pub fn new(id: AttributeSetInstanceId) -> Self {
        Self {
            id,
            attributes: Vec::new(),
        }
    }

    /// 建構器模式：添加屬性
    pub fn with_attribute(
        mut self,
        attribute_id: i32,
        attribute_value_id: Option<i32>,
        storage_relevant: bool,
    ) -> Self {
        self.attributes.push(AttributeInstance {
            attribute_id,
            attribute_value_id,
            storage_relevant,
        });
        self
    }

    /// 影響庫存區分的屬性值ID
    pub fn storage_attribute_value_ids(&self) -> Vec<i32> {
        self.attributes
            .iter()
            .filter(|a| a.storage_relevant)
            .filter_map(|a| a.attribute_value_id)
            .collect()
    }
}

/// 屬性組合鍵
///
/// 由影響庫存區分的屬性值ID排序後以 `§&§` 串接而成；空字串代表「無屬性」。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributesKey(String);

impl AttributesKey {
    pub const SEPARATOR: &'static str = "§&§";

    /// 無屬性
    pub fn none() -> Self {
        Self(String::new())
    }

    /// 由屬性值ID建立（順序不影響結果）
    pub fn of_attribute_value_ids(ids: &[i32]) -> Self {
        let mut sorted = ids.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        let parts: Vec<String> = sorted.iter().map(|id| id.to_string()).collect();
        Self(parts.join(Self::SEPARATOR))
    }

    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AttributesKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "<NONE>")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// 產品描述（產品 + 屬性組合鍵 + 屬性集實例）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductDescriptor {
    pub product_id: ProductId,
    pub attributes_key: AttributesKey,
    pub attribute_set_instance_id: AttributeSetInstanceId,
}

impl ProductDescriptor {
    /// 由產品與屬性建立
    pub fn for_product_and_attributes(
        product_id: ProductId,
        attributes_key: AttributesKey,
        attribute_set_instance_id: AttributeSetInstanceId,
    ) -> Self {
        Self {
            product_id,
            attributes_key,
            attribute_set_instance_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_key_is_order_independent() {
        let a = AttributesKey::of_attribute_value_ids(&[30, 10, 20]);
        let b = AttributesKey::of_attribute_value_ids(&[20, 30, 10, 10]);

        assert_eq!(a, b);
        assert_eq!(a.as_str(), "10§&§20§&§30");
        assert!(!a.is_none());
    }

    #[test]
    fn test_attributes_key_none() {
        assert!(AttributesKey::none().is_none());
        assert!(AttributesKey::of_attribute_value_ids(&[]).is_none());
        assert_eq!(AttributesKey::none().to_string(), "<NONE>");
    }

    #[test]
    fn test_storage_attribute_value_ids() {
        let asi = AttributeSetInstance::new(AttributeSetInstanceId::of_repo_id(5).unwrap())
            .with_attribute(1, Some(101), true)
            .with_attribute(2, Some(202), false)
            .with_attribute(3, None, true);

        assert_eq!(asi.storage_attribute_value_ids(), vec![101]);
    }
}
