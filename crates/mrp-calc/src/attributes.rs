//! 屬性組合鍵與產品描述

use erp_core::ProductId;
use mrp_core::{AttributeSetInstanceId, AttributesKey, ProductBomLine, ProductDescriptor};

use crate::repository::AttributeSetInstanceRepository;

/// 由屬性集實例中影響庫存的屬性建立組合鍵
///
/// 無屬性集實例、找不到實例或沒有影響庫存的屬性時回傳 `None`。
pub fn attributes_key_for_asi(
    repo: &dyn AttributeSetInstanceRepository,
    asi_id: AttributeSetInstanceId,
) -> Option<AttributesKey> {
    if asi_id.is_none() {
        return None;
    }

    let asi = repo.find_attribute_set_instance(asi_id)?;
    let value_ids = asi.storage_attribute_value_ids();
    if value_ids.is_empty() {
        return None;
    }

    Some(AttributesKey::of_attribute_value_ids(&value_ids))
}

/// 產品描述：無法解析組合鍵時使用「無屬性」
pub fn product_descriptor(
    repo: &dyn AttributeSetInstanceRepository,
    product_id: ProductId,
    asi_id: AttributeSetInstanceId,
) -> ProductDescriptor {
    let attributes_key = attributes_key_for_asi(repo, asi_id).unwrap_or_else(AttributesKey::none);
    ProductDescriptor::for_product_and_attributes(product_id, attributes_key, asi_id)
}

/// BOM 明細的元件描述
pub fn product_descriptor_for_bom_line(
    repo: &dyn AttributeSetInstanceRepository,
    line: &ProductBomLine,
) -> ProductDescriptor {
    product_descriptor(repo, line.product_id, line.attribute_set_instance_id)
}
