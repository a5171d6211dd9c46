use super::*;

// =============================================================
// parse_int_prefix
// =============================================================

#[test]
fn parse_int_prefix_reads_plain_integer() {
    assert_eq!(parse_int_prefix("42"), Some(42));
    assert_eq!(parse_int_prefix("  7 "), Some(7));
}

#[test]
fn parse_int_prefix_stops_at_first_non_digit() {
    assert_eq!(parse_int_prefix("12abc"), Some(12));
    assert_eq!(parse_int_prefix("3.9"), Some(3));
}

#[test]
fn parse_int_prefix_handles_sign() {
    assert_eq!(parse_int_prefix("-4"), Some(-4));
    assert_eq!(parse_int_prefix("+5"), Some(5));
}

#[test]
fn parse_int_prefix_rejects_non_numeric() {
    assert_eq!(parse_int_prefix(""), None);
    assert_eq!(parse_int_prefix("abc"), None);
    assert_eq!(parse_int_prefix("-"), None);
}

// =============================================================
// parse_float_prefix
// =============================================================

#[test]
fn parse_float_prefix_reads_decimals() {
    assert_eq!(parse_float_prefix("85"), Some(85.0));
    assert_eq!(parse_float_prefix("12.50"), Some(12.5));
    assert_eq!(parse_float_prefix(".5"), Some(0.5));
    assert_eq!(parse_float_prefix("7."), Some(7.0));
}

#[test]
fn parse_float_prefix_ignores_trailing_text() {
    assert_eq!(parse_float_prefix("150 MXN"), Some(150.0));
    assert_eq!(parse_float_prefix("1,50"), Some(1.0));
}

#[test]
fn parse_float_prefix_reads_exponents() {
    assert_eq!(parse_float_prefix("1e3"), Some(1000.0));
    assert_eq!(parse_float_prefix("2.5E-1"), Some(0.25));
    assert_eq!(parse_float_prefix("-1.5e+2 MXN"), Some(-150.0));
    assert_eq!(parse_float_prefix(".5e1"), Some(5.0));
}

#[test]
fn parse_float_prefix_stops_before_incomplete_exponent() {
    assert_eq!(parse_float_prefix("3e"), Some(3.0));
    assert_eq!(parse_float_prefix("3e-"), Some(3.0));
    assert_eq!(parse_float_prefix("4.5easy"), Some(4.5));
    assert_eq!(parse_float_prefix("e5"), None);
}

#[test]
fn parse_float_prefix_rejects_non_numeric() {
    assert_eq!(parse_float_prefix("precio"), None);
    assert_eq!(parse_float_prefix("."), None);
}

// =============================================================
// parse_price
// =============================================================

#[test]
fn parse_price_reads_displayed_text() {
    assert_eq!(parse_price("85"), 85.0);
    assert_eq!(parse_price(" $120.5 "), 120.5);
}

#[test]
fn parse_price_degrades_to_zero() {
    assert_eq!(parse_price("consultar"), 0.0);
    assert_eq!(parse_price(""), 0.0);
    assert_eq!(parse_price("-10"), 0.0);
}

// =============================================================
// parse_quantity
// =============================================================

#[test]
fn parse_quantity_reads_value() {
    assert_eq!(parse_quantity("2"), 2);
    assert_eq!(parse_quantity("10"), 10);
}

#[test]
fn parse_quantity_never_below_minimum() {
    assert_eq!(parse_quantity("0"), MIN_QUANTITY);
    assert_eq!(parse_quantity("-3"), MIN_QUANTITY);
    assert_eq!(parse_quantity(""), MIN_QUANTITY);
    assert_eq!(parse_quantity("dos"), MIN_QUANTITY);
}

#[test]
fn parse_quantity_saturates_huge_values() {
    assert_eq!(parse_quantity("99999999999999999999"), u32::MAX);
}
