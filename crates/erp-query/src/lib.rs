//! # ERP Query
//!
//! 記錄過濾條件：同時支援記憶體內比對與 SQL 片段輸出

pub mod like;
pub mod substring;

use std::collections::{BTreeMap, HashMap};

pub use like::like_matches;
pub use substring::SubstringFilter;

/// 過濾條件
pub trait QueryFilter<M: ?Sized> {
    /// 記錄是否符合條件
    fn accept(&self, model: &M) -> bool;

    /// 對應的 SQL WHERE 片段
    fn sql(&self) -> String;
}

/// 可依欄位名稱取值的記錄
pub trait ColumnValues {
    fn column_value(&self, column: &str) -> Option<String>;
}

impl ColumnValues for HashMap<String, String> {
    fn column_value(&self, column: &str) -> Option<String> {
        self.get(column).cloned()
    }
}

impl ColumnValues for BTreeMap<String, String> {
    fn column_value(&self, column: &str) -> Option<String> {
        self.get(column).cloned()
    }
}
