//! Display helpers. Grouping is fixed (comma every three digits) so output is
//! identical regardless of the host locale.

use crate::models::Property;

pub const CURRENCY_PREFIX: &str = "PKR";
pub const AREA_UNIT: &str = "sq ft";

/// `1234567.4` -> `"PKR 1,234,567"`
pub fn format_currency(amount: f64) -> String {
    format!("{} {}", CURRENCY_PREFIX, group_number(amount, 0))
}

/// `1200` -> `"1,200 sq ft"`
pub fn format_area(area: f64) -> String {
    format!("{} {}", group_number(area, 3), AREA_UNIT)
}

/// Price-per-area label shown on a listing's detail page
pub fn format_price_per_sq_ft(property: &Property) -> String {
    format!(
        "{} {}/{}",
        group_number(property.price_per_sq_ft() as f64, 0),
        CURRENCY_PREFIX,
        AREA_UNIT
    )
}

/// Round to at most `max_fraction` decimals, drop trailing zeros and group the
/// integer part.
fn group_number(value: f64, max_fraction: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // Half away from zero, matching the calculator's rounding.
    let value = if max_fraction == 0 { value.round() } else { value };

    let fixed = format!("{:.*}", max_fraction, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac)) => (int_part, frac.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
