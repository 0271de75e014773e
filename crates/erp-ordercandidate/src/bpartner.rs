//! 訂單候選的業務夥伴資訊

use erp_core::BPartnerId;
use serde::{Deserialize, Serialize};

/// 未設定的地址 / 聯絡人 ID
const UNSET_ID: i32 = -1;

fn normalize_id(id: i32) -> i32 {
    if id > 0 {
        id
    } else {
        UNSET_ID
    }
}

/// 業務夥伴、地址與聯絡人
///
/// 地址與聯絡人 ID `<= 0` 一律正規化為 `-1`，反序列化時亦同。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawBPartnerInfo")]
pub struct OLCandBPartnerInfo {
    bpartner_id: Option<BPartnerId>,
    bpartner_location_id: i32,
    contact_id: i32,
}

#[derive(Deserialize)]
struct RawBPartnerInfo {
    #[serde(default)]
    bpartner_id: Option<BPartnerId>,
    #[serde(default)]
    bpartner_location_id: i32,
    #[serde(default)]
    contact_id: i32,
}

impl From<RawBPartnerInfo> for OLCandBPartnerInfo {
    fn from(raw: RawBPartnerInfo) -> Self {
        Self::new(raw.bpartner_id, raw.bpartner_location_id, raw.contact_id)
    }
}

impl OLCandBPartnerInfo {
    pub fn new(bpartner_id: Option<BPartnerId>, bpartner_location_id: i32, contact_id: i32) -> Self {
        Self {
            bpartner_id,
            bpartner_location_id: normalize_id(bpartner_location_id),
            contact_id: normalize_id(contact_id),
        }
    }

    pub fn builder() -> OLCandBPartnerInfoBuilder {
        OLCandBPartnerInfoBuilder::default()
    }

    pub fn bpartner_id(&self) -> Option<BPartnerId> {
        self.bpartner_id
    }

    pub fn bpartner_location_id(&self) -> i32 {
        self.bpartner_location_id
    }

    pub fn contact_id(&self) -> i32 {
        self.contact_id
    }

    pub fn has_location(&self) -> bool {
        self.bpartner_location_id > 0
    }

    pub fn has_contact(&self) -> bool {
        self.contact_id > 0
    }
}

/// [`OLCandBPartnerInfo`] 建構器
#[derive(Debug, Clone, Default)]
pub struct OLCandBPartnerInfoBuilder {
    bpartner_id: Option<BPartnerId>,
    bpartner_location_id: i32,
    contact_id: i32,
}

impl OLCandBPartnerInfoBuilder {
    pub fn bpartner_id(mut self, bpartner_id: Option<BPartnerId>) -> Self {
        self.bpartner_id = bpartner_id;
        self
    }

    pub fn bpartner_location_id(mut self, bpartner_location_id: i32) -> Self {
        self.bpartner_location_id = bpartner_location_id;
        self
    }

    pub fn contact_id(mut self, contact_id: i32) -> Self {
        self.contact_id = contact_id;
        self
    }

    pub fn build(self) -> OLCandBPartnerInfo {
        OLCandBPartnerInfo::new(self.bpartner_id, self.bpartner_location_id, self.contact_id)
    }
}
