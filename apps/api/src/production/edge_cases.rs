//! Edge-case catalog: fixed adversarial inputs plus a classifier that labels
//! any input with the first matching category.

use serde::{Deserialize, Serialize};

/// Inputs longer than this (in characters) classify as `VeryLong`.
pub const VERY_LONG_THRESHOLD: usize = 500;

const MANY_NEWLINES: &str = "\n\n\n\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeCaseCategory {
    Empty,
    WhitespaceOnly,
    VeryLong,
    UppercaseOnly,
    LowercaseOnly,
    SpecialCharsOnly,
    NumbersOnly,
    ManyNewlines,
    Other,
}

impl EdgeCaseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeCaseCategory::Empty => "empty",
            EdgeCaseCategory::WhitespaceOnly => "whitespace_only",
            EdgeCaseCategory::VeryLong => "very_long",
            EdgeCaseCategory::UppercaseOnly => "uppercase_only",
            EdgeCaseCategory::LowercaseOnly => "lowercase_only",
            EdgeCaseCategory::SpecialCharsOnly => "special_chars_only",
            EdgeCaseCategory::NumbersOnly => "numbers_only",
            EdgeCaseCategory::ManyNewlines => "many_newlines",
            EdgeCaseCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for EdgeCaseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The version-1 catalog. Order is stable; callers index into it.
pub fn catalog() -> Vec<String> {
    vec![
        String::new(),
        " ".repeat(100),
        "a".repeat(1000),
        "!@#$%^&*()".to_string(),
        "1234567890".repeat(100),
        "test\n\n\n\n\n\ntest".to_string(),
        format!("test{}test", "\t".repeat(50)),
        "UPPERCASE ONLY TEXT".to_string(),
        "lowercase only text".to_string(),
        "MiXeD cAsE TeXt".to_string(),
        "test".repeat(100),
    ]
}

/// Labels an input. Checks run in a fixed precedence and the first hit wins,
/// so a 600-character uppercase string is `VeryLong`, not `UppercaseOnly`.
pub fn classify(input: &str) -> EdgeCaseCategory {
    if input.is_empty() {
        EdgeCaseCategory::Empty
    } else if input.chars().all(char::is_whitespace) {
        EdgeCaseCategory::WhitespaceOnly
    } else if input.chars().count() > VERY_LONG_THRESHOLD {
        EdgeCaseCategory::VeryLong
    } else if all_cased_are(input, char::is_uppercase) {
        EdgeCaseCategory::UppercaseOnly
    } else if all_cased_are(input, char::is_lowercase) {
        EdgeCaseCategory::LowercaseOnly
    } else if input.chars().all(|c| !c.is_alphanumeric()) {
        EdgeCaseCategory::SpecialCharsOnly
    } else if input.chars().all(char::is_numeric) {
        EdgeCaseCategory::NumbersOnly
    } else if input.contains(MANY_NEWLINES) {
        EdgeCaseCategory::ManyNewlines
    } else {
        EdgeCaseCategory::Other
    }
}

/// True when the input has at least one cased character and every cased
/// character satisfies `pred`. Uncased characters (digits, spaces, symbols)
/// are ignored.
fn all_cased_are(input: &str, pred: fn(char) -> bool) -> bool {
    let mut cased = input
        .chars()
        .filter(|c| c.is_uppercase() || c.is_lowercase())
        .peekable();
    cased.peek().is_some() && cased.all(pred)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eleven_fixed_entries() {
        let c = catalog();
        assert_eq!(c.len(), 11);
        assert_eq!(c, catalog(), "catalog must be deterministic");
    }

    #[test]
    fn test_empty() {
        assert_eq!(classify(""), EdgeCaseCategory::Empty);
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(classify("   "), EdgeCaseCategory::WhitespaceOnly);
        assert_eq!(classify("\t\n "), EdgeCaseCategory::WhitespaceOnly);
    }

    #[test]
    fn test_length_takes_precedence_over_case() {
        assert_eq!(classify(&"A".repeat(600)), EdgeCaseCategory::VeryLong);
    }

    #[test]
    fn test_exactly_500_chars_is_not_very_long() {
        assert_eq!(classify(&"A".repeat(500)), EdgeCaseCategory::UppercaseOnly);
    }

    #[test]
    fn test_uppercase_and_lowercase() {
        assert_eq!(classify("ABCDEF"), EdgeCaseCategory::UppercaseOnly);
        assert_eq!(classify("UPPER 123!"), EdgeCaseCategory::UppercaseOnly);
        assert_eq!(classify("lowercase only text"), EdgeCaseCategory::LowercaseOnly);
    }

    #[test]
    fn test_special_chars_only() {
        assert_eq!(classify("!@#$%^&*()"), EdgeCaseCategory::SpecialCharsOnly);
    }

    #[test]
    fn test_numbers_only() {
        assert_eq!(classify("1234567890"), EdgeCaseCategory::NumbersOnly);
    }

    #[test]
    fn test_many_newlines_needs_five_in_a_row() {
        assert_eq!(classify("1\n\n\n\n\n2"), EdgeCaseCategory::ManyNewlines);
        assert_eq!(classify("1\n\n\n\n2"), EdgeCaseCategory::Other);
    }

    #[test]
    fn test_mixed_case_is_other() {
        assert_eq!(classify("MiXeD cAsE TeXt"), EdgeCaseCategory::Other);
    }

    #[test]
    fn test_catalog_classification() {
        let labels: Vec<&str> = catalog().iter().map(|c| classify(c).as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "empty",
                "whitespace_only",
                "very_long",
                "special_chars_only",
                "very_long",
                "lowercase_only",
                "lowercase_only",
                "uppercase_only",
                "lowercase_only",
                "other",
                "lowercase_only",
            ]
        );
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&EdgeCaseCategory::SpecialCharsOnly).unwrap();
        assert_eq!(json, r#""special_chars_only""#);
    }
}
