use super::*;

// -----------------------------------------------------------------------
// parse_brl_amount
// -----------------------------------------------------------------------

#[test]
fn brl_amount_with_thousands_separator() {
    assert_eq!(parse_brl_amount("1.234,50"), Some(1234.50));
}

#[test]
fn brl_amount_without_thousands_separator() {
    assert_eq!(parse_brl_amount("49,90"), Some(49.90));
}

#[test]
fn brl_amount_with_millions() {
    assert_eq!(parse_brl_amount("1.000.000,00"), Some(1_000_000.0));
}

#[test]
fn brl_amount_rejects_garbage() {
    assert_eq!(parse_brl_amount("abc,de"), None);
    assert_eq!(parse_brl_amount(""), None);
}

// -----------------------------------------------------------------------
// parse_decimal
// -----------------------------------------------------------------------

#[test]
fn decimal_plain_point_notation() {
    assert_eq!(parse_decimal("49.90"), Some(49.90));
    assert_eq!(parse_decimal(" 129 "), Some(129.0));
}

#[test]
fn decimal_comma_notation_falls_back_to_brl() {
    assert_eq!(parse_decimal("1.299,00"), Some(1299.0));
}

#[test]
fn decimal_rejects_non_finite_and_empty() {
    assert_eq!(parse_decimal("NaN"), None);
    assert_eq!(parse_decimal("inf"), None);
    assert_eq!(parse_decimal(""), None);
    assert_eq!(parse_decimal("consulte"), None);
}

// -----------------------------------------------------------------------
// parse_split_amount
// -----------------------------------------------------------------------

#[test]
fn split_amount_joins_parts() {
    assert_eq!(parse_split_amount("89", "90"), Some(89.90));
}

#[test]
fn split_amount_strips_thousands_separator_and_symbols() {
    assert_eq!(parse_split_amount("R$ 1.299", ",00"), Some(1299.0));
}

#[test]
fn split_amount_requires_both_parts() {
    assert_eq!(parse_split_amount("", "90"), None);
    assert_eq!(parse_split_amount("89", " "), None);
}

// -----------------------------------------------------------------------
// round_cents
// -----------------------------------------------------------------------

#[test]
fn round_cents_rounds_to_two_places() {
    assert_eq!(round_cents(54.896), 54.9);
    assert_eq!(round_cents(10.0 / 3.0), 3.33);
}
