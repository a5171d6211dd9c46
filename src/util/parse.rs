//! Lenient numeric parsing for values read out of the DOM.
//!
//! Prices and quantities arrive as free text (input values, option values,
//! rendered labels). Parsing reads the longest numeric prefix, the way the
//! browser's `parseInt`/`parseFloat` do, and degrades instead of failing:
//! an unreadable price becomes `0`, an unreadable quantity becomes `1`.

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;

/// Smallest quantity a line item or stepper can hold.
pub const MIN_QUANTITY: u32 = 1;

/// Parse the leading integer of `text`, ignoring leading whitespace.
///
/// Returns `None` when no digit follows the optional sign.
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, rest) = split_sign(s);
    let digits = leading_digits(rest);
    if digits.is_empty() {
        return None;
    }
    // Saturate instead of overflowing on absurdly long input.
    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse the leading decimal number of `text`, ignoring leading whitespace.
///
/// Accepts an exponent (`1e3`, `2.5E-1`) only when digits follow the `e`;
/// otherwise the number ends before it.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let (negative, rest) = split_sign(s);
    let int_part = leading_digits(rest);
    let after_int = &rest[int_part.len()..];
    let (frac_part, after_mantissa) = match after_int.strip_prefix('.') {
        Some(tail) => {
            let frac = leading_digits(tail);
            (frac, &tail[frac.len()..])
        }
        None => ("", after_int),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let literal = format!(
        "{}.{}{}",
        if int_part.is_empty() { "0" } else { int_part },
        if frac_part.is_empty() { "0" } else { frac_part },
        exponent_suffix(after_mantissa)
    );
    match literal.parse::<f64>() {
        Ok(value) if negative => Some(-value),
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

/// `e<sign><digits>` at the start of `s`, or empty when there is none.
fn exponent_suffix(s: &str) -> String {
    let Some(tail) = s.strip_prefix(['e', 'E']) else {
        return String::new();
    };
    let (negative, rest) = split_sign(tail);
    let digits = leading_digits(rest);
    if digits.is_empty() {
        return String::new();
    }
    format!("e{}{digits}", if negative { "-" } else { "" })
}

/// Parse a displayed price. Tolerates a leading `$`; unreadable or negative
/// text degrades to `0.0`.
pub fn parse_price(text: &str) -> f64 {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    match parse_float_prefix(trimmed) {
        Some(value) if value.is_finite() && value >= 0.0 => value,
        Some(value) => {
            leptos::logging::warn!("price {value} out of range, using 0");
            0.0
        }
        None => {
            leptos::logging::warn!("unreadable price {text:?}, using 0");
            0.0
        }
    }
}

/// Parse a quantity field. Unreadable or sub-minimum values become
/// [`MIN_QUANTITY`].
pub fn parse_quantity(text: &str) -> u32 {
    match parse_int_prefix(text) {
        Some(value) if value >= i64::from(MIN_QUANTITY) => u32::try_from(value).unwrap_or(u32::MAX),
        Some(_) => MIN_QUANTITY,
        None => {
            leptos::logging::warn!("unreadable quantity {text:?}, using {MIN_QUANTITY}");
            MIN_QUANTITY
        }
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else {
        (false, s.strip_prefix('+').unwrap_or(s))
    }
}

fn leading_digits(s: &str) -> &str {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    &s[..end]
}
