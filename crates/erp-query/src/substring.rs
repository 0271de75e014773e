//! 子字串過濾

use serde::{Deserialize, Serialize};

use crate::like::like_matches;
use crate::{ColumnValues, QueryFilter};

/// 欄位值包含指定子字串（子字串本身可含 `%`、`_` 萬用字元）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstringFilter {
    column_name: String,
    pattern: String,
    ignore_case: bool,
}

impl SubstringFilter {
    pub fn new(column_name: impl Into<String>, substring: &str, ignore_case: bool) -> Self {
        Self {
            column_name: column_name.into(),
            pattern: Self::like_pattern(substring),
            ignore_case,
        }
    }

    /// 去除前後空白，並在兩端補上 `%`
    fn like_pattern(substring: &str) -> String {
        let trimmed = substring.trim();
        let mut pattern = String::with_capacity(trimmed.len() + 2);
        if !trimmed.starts_with('%') {
            pattern.push('%');
        }
        pattern.push_str(trimmed);
        if !pattern.ends_with('%') {
            pattern.push('%');
        }
        pattern
    }

    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    /// 實際使用的 LIKE 樣式
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_ignore_case(&self) -> bool {
        self.ignore_case
    }

    fn operator(&self) -> &'static str {
        if self.ignore_case {
            "ILIKE"
        } else {
            "LIKE"
        }
    }
}

impl<M: ColumnValues + ?Sized> QueryFilter<M> for SubstringFilter {
    fn accept(&self, model: &M) -> bool {
        match model.column_value(&self.column_name) {
            Some(value) => like_matches(&value, &self.pattern, self.ignore_case),
            None => false,
        }
    }

    fn sql(&self) -> String {
        format!(
            "{}  {}  '{}'",
            self.column_name,
            self.operator(),
            self.pattern.replace('\'', "''")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::{BTreeMap, HashMap};

    fn record(name: &str) -> HashMap<String, String> {
        HashMap::from([("Name".to_string(), name.to_string())])
    }

    #[test]
    fn test_accept_substring() {
        let filter = SubstringFilter::new("Name", "MySubString", true);
        assert!(filter.accept(&record("BLAHblahMySUBStringblah")));
    }

    #[test]
    fn test_accept_like_expression() {
        let filter = SubstringFilter::new("Name", "My%str_ng", true);
        assert!(filter.accept(&record("BLAHblahMySUBStringblah")));
    }

    #[test]
    fn test_case_sensitive_rejects() {
        let filter = SubstringFilter::new("Name", "MySubString", false);
        assert!(!filter.accept(&record("BLAHblahMySUBStringblah")));
        assert!(filter.accept(&record("xxMySubStringxx")));
    }

    #[test]
    fn test_missing_column_rejected() {
        let filter = SubstringFilter::new("Description", "x", true);
        let values: BTreeMap<String, String> = BTreeMap::new();

        assert!(!filter.accept(&values));
        assert!(!filter.accept(&record("x")));
    }

    #[rstest]
    #[case("My%Str_ng", true, "Name  ILIKE  '%My%Str_ng%'")]
    #[case("  abc  ", false, "Name  LIKE  '%abc%'")]
    #[case("%abc%", true, "Name  ILIKE  '%abc%'")]
    #[case("O'Brien", true, "Name  ILIKE  '%O''Brien%'")]
    fn test_sql(#[case] substring: &str, #[case] ignore_case: bool, #[case] expected: &str) {
        let filter = SubstringFilter::new("Name", substring, ignore_case);
        assert_eq!(QueryFilter::<HashMap<String, String>>::sql(&filter), expected);
    }

    #[test]
    fn test_pattern_wrapping() {
        assert_eq!(SubstringFilter::new("Name", "abc%", true).pattern(), "%abc%");
        assert_eq!(SubstringFilter::new("Name", "", true).pattern(), "%");
    }
}
