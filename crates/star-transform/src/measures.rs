//! Casting of the measure columns.

use star_common::{parse_f64, parse_i64};

/// Casts the quantity text to a 32-bit integer.
///
/// Integer text is taken as is and decimal text is truncated toward zero.
/// Non-numeric, non-finite or out-of-range values yield `None`.
pub fn parse_quantity(value: &str) -> Option<i32> {
    if let Some(integer) = parse_i64(value) {
        return i32::try_from(integer).ok();
    }
    let decimal = parse_f64(value)?;
    if !decimal.is_finite() {
        return None;
    }
    let truncated = decimal.trunc();
    if truncated < f64::from(i32::MIN) || truncated > f64::from(i32::MAX) {
        return None;
    }
    Some(truncated as i32)
}

/// Casts the total value text to a float.
pub fn parse_total_value(value: &str) -> Option<f64> {
    parse_f64(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_accepts_integers() {
        assert_eq!(parse_quantity("3"), Some(3));
        assert_eq!(parse_quantity(" 007 "), Some(7));
        assert_eq!(parse_quantity("-2"), Some(-2));
    }

    #[test]
    fn quantity_truncates_decimals() {
        assert_eq!(parse_quantity("3.9"), Some(3));
        assert_eq!(parse_quantity("-3.9"), Some(-3));
    }

    #[test]
    fn quantity_rejects_garbage_and_overflow() {
        assert_eq!(parse_quantity("abc"), None);
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("3000000000"), None);
        assert_eq!(parse_quantity("inf"), None);
        assert_eq!(parse_quantity("NaN"), None);
    }

    #[test]
    fn total_value_parses_decimals() {
        assert_eq!(parse_total_value("10.50"), Some(10.5));
        assert_eq!(parse_total_value("abc"), None);
        assert_eq!(parse_total_value(""), None);
    }
}
