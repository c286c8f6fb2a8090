// src/parse/cell.rs

//! Cell text normalization and numeric coercion.
//!
//! The portal renders numbers in Turkish locale: `.` as thousands separator,
//! `,` as decimal separator, and an occasional `%` suffix. Row labels may
//! carry a trailing `*` footnote marker.

use scraper::ElementRef;
use serde_json::{Number, Value};

/// Collect an element's text content, whitespace-normalized.
pub fn text_of(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clean a row-key or cell label: trim and drop the trailing footnote marker.
pub fn clean_label(text: &str) -> String {
    text.trim().trim_end_matches('*').trim_end().to_string()
}

/// Coerce localized display text to a scalar value.
///
/// After removing thousands separators and percent signs: a decimal comma
/// makes it a float, otherwise it parses as an integer. Text that is neither
/// is returned verbatim (names must not be mangled). Empty input is null.
pub fn coerce_numeric(text: &str) -> Value {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }

    let cleaned = trimmed.replace('.', "").replace('%', "");
    let cleaned = cleaned.trim();

    if cleaned.contains(',') {
        if let Ok(f) = cleaned.replace(',', ".").parse::<f64>() {
            if let Some(n) = Number::from_f64(f) {
                return Value::Number(n);
            }
        }
    } else if let Ok(i) = cleaned.parse::<i64>() {
        return Value::Number(i.into());
    }

    Value::String(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Format a scalar the way the portal displays it.
    fn to_display(value: &Value) -> String {
        match value {
            Value::Number(n) if n.is_i64() => n.to_string(),
            Value::Number(n) => n.to_string().replace('.', ","),
            Value::String(s) => s.clone(),
            _ => String::new(),
        }
    }

    #[test]
    fn integers_parse() {
        assert_eq!(coerce_numeric("100"), json!(100));
        assert_eq!(coerce_numeric(" 0 "), json!(0));
    }

    #[test]
    fn thousands_separator_stripped() {
        assert_eq!(coerce_numeric("1.234"), json!(1234));
        assert_eq!(coerce_numeric("12.345.678"), json!(12345678));
    }

    #[test]
    fn decimal_comma_parses_as_float() {
        assert_eq!(coerce_numeric("45,5"), json!(45.5));
        assert_eq!(coerce_numeric("450,21"), json!(450.21));
    }

    #[test]
    fn percent_sign_stripped() {
        assert_eq!(coerce_numeric("%85,7"), json!(85.7));
        assert_eq!(coerce_numeric("100%"), json!(100));
    }

    #[test]
    fn non_numeric_text_returned_verbatim() {
        assert_eq!(coerce_numeric("Bilgisayar Mühendisliği"), json!("Bilgisayar Mühendisliği"));
        // Dots in names survive; only numeric candidates are cleaned
        assert_eq!(coerce_numeric("Doç. Dr."), json!("Doç. Dr."));
    }

    #[test]
    fn empty_coerces_to_null() {
        assert_eq!(coerce_numeric(""), Value::Null);
        assert_eq!(coerce_numeric("   "), Value::Null);
    }

    #[test]
    fn display_round_trip() {
        for value in [json!(0), json!(100), json!(45.5), json!("Text")] {
            assert_eq!(coerce_numeric(&to_display(&value)), value);
        }
    }

    #[test]
    fn clean_label_strips_footnote_marker() {
        assert_eq!(clean_label("Row2*"), "Row2");
        assert_eq!(clean_label(" Genel "), "Genel");
        assert_eq!(clean_label("Kadın"), "Kadın");
    }
}
