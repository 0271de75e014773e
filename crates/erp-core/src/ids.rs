//! 資料庫主鍵（Repo ID）類型
//!
//! 主鍵一律為正整數；`<= 0` 代表「未設定」，在型別層級以 `Option` 表達。

/// 可取回原始主鍵值的類型
pub trait RepoIdAware: Copy {
    /// 原始主鍵值
    fn repo_id(&self) -> i32;
}

/// 定義一個包裝 `i32` 主鍵的強型別 ID
///
/// 產生的類型提供 `of_repo_id`、`of_repo_id_or_none`、`to_repo_id`，
/// 並以純整數進行序列化（反序列化時同樣拒絕 `<= 0` 的值）。
///
/// ```
/// erp_core::repo_id_type!(
///     /// 發票 ID
///     InvoiceId, "C_Invoice_ID"
/// );
///
/// let id = InvoiceId::of_repo_id(42).unwrap();
/// assert_eq!(id.repo_id(), 42);
/// assert!(InvoiceId::of_repo_id_or_none(0).is_none());
/// assert_eq!(InvoiceId::to_repo_id(None), -1);
/// ```
#[macro_export]
macro_rules! repo_id_type {
    ($(#[$meta:meta])* $name:ident, $column:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i32);

        impl $name {
            /// 對應的資料庫欄位名稱
            pub const COLUMN_NAME: &'static str = $column;

            /// 由原始主鍵建立，`<= 0` 視為錯誤
            pub fn of_repo_id(repo_id: i32) -> ::std::result::Result<Self, $crate::InvalidRepoIdError> {
                if repo_id > 0 {
                    Ok(Self(repo_id))
                } else {
                    Err($crate::InvalidRepoIdError {
                        column: $column,
                        value: repo_id,
                    })
                }
            }

            /// 由原始主鍵建立，`<= 0` 視為未設定
            pub fn of_repo_id_or_none(repo_id: i32) -> Option<Self> {
                if repo_id > 0 {
                    Some(Self(repo_id))
                } else {
                    None
                }
            }

            /// 轉回原始主鍵，未設定時為 -1
            pub fn to_repo_id(id: Option<Self>) -> i32 {
                id.map(|id| id.0).unwrap_or(-1)
            }

            /// 原始主鍵值
            pub fn repo_id(&self) -> i32 {
                self.0
            }
        }

        impl $crate::RepoIdAware for $name {
            fn repo_id(&self) -> i32 {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.serialize_i32(self.0)
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                let repo_id = <i32 as $crate::__serde::Deserialize>::deserialize(deserializer)?;
                Self::of_repo_id(repo_id).map_err(<D::Error as $crate::__serde::de::Error>::custom)
            }
        }
    };
}

repo_id_type!(
    /// 產品
    ProductId, "M_Product_ID"
);
repo_id_type!(
    /// 組織
    OrgId, "AD_Org_ID"
);
repo_id_type!(
    /// 倉庫
    WarehouseId, "M_Warehouse_ID"
);
repo_id_type!(
    /// 資源（工廠亦為資源）
    ResourceId, "S_Resource_ID"
);
repo_id_type!(
    /// 計量單位
    UomId, "C_UOM_ID"
);
repo_id_type!(
    /// 業務夥伴
    BPartnerId, "C_BPartner_ID"
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(42)]
    #[case(i32::MAX)]
    fn test_of_repo_id_accepts_positive(#[case] value: i32) {
        let id = ProductId::of_repo_id(value).unwrap();
        assert_eq!(id.repo_id(), value);
        assert_eq!(ProductId::of_repo_id_or_none(value), Some(id));
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i32::MIN)]
    fn test_of_repo_id_rejects_non_positive(#[case] value: i32) {
        let err = ProductId::of_repo_id(value).unwrap_err();
        assert_eq!(err.column, "M_Product_ID");
        assert_eq!(err.value, value);
        assert!(ProductId::of_repo_id_or_none(value).is_none());
    }

    #[test]
    fn test_to_repo_id() {
        assert_eq!(BPartnerId::to_repo_id(None), -1);
        assert_eq!(BPartnerId::to_repo_id(BPartnerId::of_repo_id_or_none(7)), 7);
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = WarehouseId::of_repo_id(540_008).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "540008");

        let parsed: WarehouseId = serde_json::from_str("540008").unwrap();
        assert_eq!(parsed, id);

        // 反序列化同樣拒絕非正數
        assert!(serde_json::from_str::<WarehouseId>("0").is_err());
    }
}
