//! Pure field validators.
//!
//! Every check here is total and runs in time linear in the input. Invalid
//! input is never an error: it only yields `false`.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::errors::RulesError;

/// Default lower bound for name-like fields, inclusive.
pub const DEFAULT_NAME_MIN_LENGTH: usize = 3;
/// Default upper bound for name-like fields, inclusive.
pub const DEFAULT_NAME_MAX_LENGTH: usize = 30;

static DATE_OF_BIRTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("Invalid date of birth regex")
});

/// Length bounds shared by username, password and name fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    name_min: usize,
    name_max: usize,
}

impl ValidationRules {
    /// Creates rules with inclusive name length bounds.
    ///
    /// # Errors
    /// Returns error if `min > max`.
    pub const fn new(name_min: usize, name_max: usize) -> Result<Self, RulesError> {
        if name_min > name_max {
            return Err(RulesError::InvertedNameBounds {
                min: name_min,
                max: name_max,
            });
        }
        Ok(Self { name_min, name_max })
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    pub const fn name_min(&self) -> usize {
        self.name_min
    }

    /// Returns the inclusive upper bound.
    #[must_use]
    pub const fn name_max(&self) -> usize {
        self.name_max
    }
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            name_min: DEFAULT_NAME_MIN_LENGTH,
            name_max: DEFAULT_NAME_MAX_LENGTH,
        }
    }
}

/// Checks a name-like value against the length bounds.
///
/// Length is counted in Unicode scalar values; any character is allowed.
#[must_use]
pub fn is_name_valid(value: &str, rules: &ValidationRules) -> bool {
    let len = value.chars().count();
    (rules.name_min..=rules.name_max).contains(&len)
}

/// Checks the `DD/DD/DDDD` shape with ASCII digits. No calendar check.
#[must_use]
pub fn is_valid_date_of_birth(value: &str) -> bool {
    DATE_OF_BIRTH_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, false ; "empty")]
    #[test_case(2, false ; "below_min")]
    #[test_case(3, true ; "at_min")]
    #[test_case(17, true ; "middle")]
    #[test_case(30, true ; "at_max")]
    #[test_case(31, false ; "above_max")]
    fn test_name_length_bounds(len: usize, expected: bool) {
        let value = "x".repeat(len);
        assert_eq!(is_name_valid(&value, &ValidationRules::default()), expected);
    }

    #[test]
    fn test_name_counts_characters_not_bytes() {
        let rules = ValidationRules::default();
        // Two scalar values, four bytes.
        assert!(!is_name_valid("éé", &rules));
        assert!(is_name_valid("日本語", &rules));
        assert!(is_name_valid(&"ü".repeat(30), &rules));
        assert!(!is_name_valid(&"ü".repeat(31), &rules));
    }

    #[test]
    fn test_name_allows_any_characters() {
        assert!(is_name_valid("a b", &ValidationRules::default()));
        assert!(is_name_valid("!@#$", &ValidationRules::default()));
    }

    #[test]
    fn test_custom_rules() {
        let rules = ValidationRules::new(1, 4).unwrap();
        assert!(is_name_valid("a", &rules));
        assert!(is_name_valid("abcd", &rules));
        assert!(!is_name_valid("abcde", &rules));
    }

    #[test]
    fn test_inverted_rules_rejected() {
        assert_eq!(
            ValidationRules::new(10, 2),
            Err(RulesError::InvertedNameBounds { min: 10, max: 2 })
        );
    }

    #[test_case("01/02/2000", true ; "well_formed")]
    #[test_case("99/99/9999", true ; "no_calendar_check")]
    #[test_case("13/45/2020", true ; "impossible_date")]
    #[test_case("1/2/2000", false ; "single_digits")]
    #[test_case("01/02/200", false ; "short_year")]
    #[test_case("01-02-2000", false ; "wrong_separator")]
    #[test_case(" 01/02/2000", false ; "leading_space")]
    #[test_case("01/02/2000\n", false ; "trailing_newline")]
    #[test_case("01/02/20000", false ; "long_year")]
    #[test_case("", false ; "empty")]
    #[test_case("٠١/٠٢/٢٠٠٠", false ; "non_ascii_digits")]
    fn test_date_of_birth(value: &str, expected: bool) {
        assert_eq!(is_valid_date_of_birth(value), expected);
    }
}
