//! Measurement unit expansion
//!
//! Rewrites abbreviated cooking units ("2 tsp") into full words
//! ("2 teaspoon") for display.

use once_cell::sync::Lazy;
use regex::Regex;

/// Combined abbreviation pattern, compiled once. A single `replace_all`
/// pass never rescans replacement text, so the `g` in an expanded
/// "kilogram" cannot be matched again.
static UNIT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(tbsp|tsp|cup|oz|lb|kg|ml|g|l)\b").expect("valid unit pattern")
});

/// Expand abbreviated measurement units to full words.
///
/// Whole-word, case-insensitive. Text with no matching abbreviation passes
/// through unchanged; the result is always trimmed.
pub fn expand_units(measure: &str) -> String {
    UNIT_PATTERN
        .replace_all(measure, |caps: &regex::Captures| {
            match caps[1].to_ascii_lowercase().as_str() {
                "tsp" => "teaspoon",
                "tbsp" => "tablespoon",
                "cup" => "cup",
                "oz" => "ounce",
                "lb" => "pound",
                "g" => "gram",
                "kg" => "kilogram",
                "ml" => "milliliter",
                "l" => "liter",
                other => other,
            }
            .to_string()
        })
        .trim()
        .to_string()
}
