//! Numeric parsing helpers for price tokens.
//!
//! Brazilian pages write money as `1.234,50` (dot thousands separator, comma
//! decimal separator) in visible text, while structured fields usually carry a
//! plain `1234.50`. Every helper returns `None` rather than an error: a token
//! that does not parse is simply not a price.

/// Parses a Brazilian-formatted amount such as `"1.234,50"`.
///
/// Thousands separators are stripped and the decimal comma becomes a point.
#[must_use]
pub(crate) fn parse_brl_amount(token: &str) -> Option<f64> {
    let normalized = token.trim().replace('.', "").replace(',', ".");
    finite(normalized.parse::<f64>().ok()?)
}

/// Parses a structured price value (attribute, meta tag, JSON string).
///
/// Plain decimal notation is tried first; values carrying a decimal comma fall
/// back to [`parse_brl_amount`].
#[must_use]
pub(crate) fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        return finite(value);
    }
    if trimmed.contains(',') {
        return parse_brl_amount(trimmed);
    }
    None
}

/// Parses a price split across integer and fraction markup.
///
/// Anything that is not an ASCII digit (currency symbol, separators,
/// whitespace) is discarded from both parts before joining them.
#[must_use]
pub(crate) fn parse_split_amount(integer: &str, fraction: &str) -> Option<f64> {
    let int_digits: String = integer.chars().filter(char::is_ascii_digit).collect();
    let frac_digits: String = fraction.chars().filter(char::is_ascii_digit).collect();
    if int_digits.is_empty() || frac_digits.is_empty() {
        return None;
    }
    finite(format!("{int_digits}.{frac_digits}").parse::<f64>().ok()?)
}

/// Rounds to two decimal places (cents).
#[must_use]
pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
