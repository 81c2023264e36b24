//! Explicit coercion of loosely typed form input.
//!
//! Every form field arrives as text. Numeric fields never fail to parse: anything
//! that is not a finite number becomes `0`, and optional text fields fall back to
//! a fixed placeholder. The helpers here are the only place those rules live.

use std::fmt;

/// A single cell value: either text or a number
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Number(f64),
}

impl Scalar {
    /// Numeric value of the cell, `0` when it is not a finite number
    pub fn as_number(&self) -> f64 {
        match self {
            Scalar::Text(text) => parse_number(text),
            Scalar::Number(value) if value.is_finite() => *value,
            Scalar::Number(_) => 0.0,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => f.write_str(text),
            Scalar::Number(value) => f.write_str(&format_number(*value)),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<&String> for Scalar {
    fn from(value: &String) -> Self {
        Scalar::Text(value.clone())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Number(f64::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Number(f64::from(value))
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Scalar::Number(value as f64)
    }
}

impl From<usize> for Scalar {
    fn from(value: usize) -> Self {
        Scalar::Number(value as f64)
    }
}

/// Parse a numeric form field. Empty, malformed or non-finite input yields `0`.
pub fn parse_number(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Parse the leading integer of a field the way a lenient form does:
/// optional sign, then digits, anything after the digits is ignored.
/// A `0x` prefix switches to hexadecimal digits.
/// Returns `None` when no digit is found.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, rest) = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(hex) => (16, hex),
        None => (10, rest),
    };
    let digits: String = rest.chars().take_while(|c| c.is_digit(radix)).collect();
    if digits.is_empty() {
        return None;
    }
    let magnitude = i64::from_str_radix(&digits, radix).unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Leading integer with a fallback for missing, invalid or zero input
pub fn int_or(input: &str, fallback: i64) -> i64 {
    match parse_leading_int(input) {
        Some(0) | None => fallback,
        Some(value) => value,
    }
}

/// Use the supplied text unless it is absent or empty
pub fn text_or(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => placeholder.to_string(),
    }
}

/// Round half up (towards positive infinity), as form-driven arithmetic expects
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Shortest text form of a number: whole values carry no fractional part
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_fallbacks() {
        assert_eq!(parse_number("125000"), 125000.0);
        assert_eq!(parse_number(" 12.5 "), 12.5);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
        assert_eq!(parse_number("inf"), 0.0);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("45"), Some(45));
        assert_eq!(parse_leading_int("  60 minutes"), Some(60));
        assert_eq!(parse_leading_int("12.7"), Some(12));
        assert_eq!(parse_leading_int("-5"), Some(-5));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn test_parse_leading_int_hex_prefix() {
        assert_eq!(parse_leading_int("0x10"), Some(16));
        assert_eq!(parse_leading_int("-0x1A"), Some(-26));
        assert_eq!(parse_leading_int("0Xff rows"), Some(255));
        assert_eq!(parse_leading_int("0x"), None);
        assert_eq!(parse_leading_int("0xg"), None);
        assert_eq!(parse_leading_int("010"), Some(10));
        assert_eq!(int_or("0x10", 5), 16);
    }

    #[test]
    fn test_int_or_treats_zero_as_missing() {
        assert_eq!(int_or("0", 45), 45);
        assert_eq!(int_or("", 5), 5);
        assert_eq!(int_or("30", 45), 30);
    }

    #[test]
    fn test_text_or() {
        assert_eq!(text_or(Some("Lab"), "General"), "Lab");
        assert_eq!(text_or(Some(""), "General"), "General");
        assert_eq!(text_or(None, "Item"), "Item");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(4.5), 5.0);
        assert_eq!(round_half_up(11.25), 11.0);
        assert_eq!(round_half_up(-0.5), 0.0);
    }

    #[test]
    fn test_scalar_display_and_coercion() {
        assert_eq!(Scalar::from(8).to_string(), "8");
        assert_eq!(Scalar::from(12.5).to_string(), "12.5");
        assert_eq!(Scalar::from("08A").to_string(), "08A");
        assert_eq!(Scalar::from("3").as_number(), 3.0);
        assert_eq!(Scalar::from("abc").as_number(), 0.0);
        assert_eq!(Scalar::Number(f64::NAN).as_number(), 0.0);
    }
}
