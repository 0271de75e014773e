//! SQL `LIKE` 比對

/// 以 SQL `LIKE` 語意比對：`%` 代表任意長度字串，`_` 代表任一字元
pub fn like_matches(value: &str, pattern: &str, ignore_case: bool) -> bool {
    let (value, pattern): (Vec<char>, Vec<char>) = if ignore_case {
        (value.to_lowercase().chars().collect(), pattern.to_lowercase().chars().collect())
    } else {
        (value.chars().collect(), pattern.chars().collect())
    };

    let mut v = 0;
    let mut p = 0;
    // 最近一個 `%` 的位置，以及當時對應的字串位置
    let mut backtrack: Option<(usize, usize)> = None;

    while v < value.len() {
        match pattern.get(p) {
            Some('%') => {
                backtrack = Some((p, v));
                p += 1;
            }
            Some(&c) if c == '_' || c == value[v] => {
                v += 1;
                p += 1;
            }
            _ => match backtrack {
                Some((star_p, star_v)) => {
                    p = star_p + 1;
                    v = star_v + 1;
                    backtrack = Some((star_p, star_v + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '%')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("abc", "abc", true)]
    #[case("abc", "a_c", true)]
    #[case("abc", "a%", true)]
    #[case("abc", "%c", true)]
    #[case("abc", "%b%", true)]
    #[case("abc", "%%", true)]
    #[case("", "%", true)]
    #[case("", "_", false)]
    #[case("abc", "ab", false)]
    #[case("abc", "a_", false)]
    #[case("abcbd", "%b_", true)]
    #[case("mississippi", "m%iss%ppi", true)]
    #[case("mississippi", "m%iss%pp", false)]
    fn test_like(#[case] value: &str, #[case] pattern: &str, #[case] expected: bool) {
        assert_eq!(like_matches(value, pattern, false), expected);
    }

    #[test]
    fn test_case_sensitivity() {
        assert!(!like_matches("ABC", "abc", false));
        assert!(like_matches("ABC", "abc", true));
        assert!(like_matches("ÄPFEL", "äp%", true));
    }

    proptest! {
        #[test]
        fn prop_value_matches_itself_wrapped(value in "[a-zA-Z0-9 ]{0,20}") {
            let wrapped = format!("%{}%", value);
            prop_assert!(like_matches(&value, &wrapped, false));
        }

        #[test]
        fn prop_underscores_match_same_length(value in "[a-z]{0,12}") {
            let pattern = "_".repeat(value.chars().count());
            prop_assert!(like_matches(&value, &pattern, false));
        }
    }
}
