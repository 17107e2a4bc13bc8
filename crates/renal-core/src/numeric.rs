//! Coercion of raw form text into numbers.
//!
//! Accepts exactly what a browser-facing form handler would accept as a
//! number: blank means zero, decimal literals with an optional sign and
//! exponent, unsigned `0x`/`0o`/`0b` integers, and signed `Infinity`.
//! Everything else is not a number.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Signed decimal literal: `12`, `-3.5`, `.5`, `5.`, `1e3`, `+2.5E-1`.
    static ref DECIMAL_PATTERN: Regex = Regex::new(
        r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$"
    ).unwrap();

    /// Unsigned radix-prefixed integer literal.
    static ref RADIX_PATTERN: Regex = Regex::new(
        r"^0(?:[xX](?P<hex>[0-9a-fA-F]+)|[oO](?P<oct>[0-7]+)|[bB](?P<bin>[01]+))$"
    ).unwrap();

    /// Signed infinity keyword.
    static ref INFINITY_PATTERN: Regex = Regex::new(r"^(?P<sign>[+-]?)Infinity$").unwrap();
}

/// Coerce a raw field into a number.
///
/// Returns `None` when the field is absent or is not numeric. The result
/// may be infinite; range and finiteness checks belong to validation.
pub fn coerce(raw: Option<&str>) -> Option<f64> {
    let text = raw?.trim_matches(is_ignorable);

    if text.is_empty() {
        return Some(0.0);
    }

    if DECIMAL_PATTERN.is_match(text) {
        // Overflowing exponents parse to infinity, which validation rejects.
        return text.parse::<f64>().ok();
    }

    if let Some(caps) = RADIX_PATTERN.captures(text) {
        let (digits, radix) = if let Some(m) = caps.name("hex") {
            (m.as_str(), 16)
        } else if let Some(m) = caps.name("oct") {
            (m.as_str(), 8)
        } else {
            (caps.name("bin")?.as_str(), 2)
        };
        return Some(radix_value(digits, radix));
    }

    if let Some(caps) = INFINITY_PATTERN.captures(text) {
        let negative = caps.name("sign").is_some_and(|m| m.as_str() == "-");
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    None
}

/// Value of a digit string in the given radix. Digits are pre-validated.
fn radix_value(digits: &str, radix: u32) -> f64 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d))
}

fn is_ignorable(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
