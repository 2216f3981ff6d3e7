use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Rounds `value` to one significant digit, keeping its sign.
#[must_use]
pub fn round_to_next_significant(value: f64) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return 0.0;
    }
    let d = (if value < 0.0 { -value } else { value }).log10().ceil();
    let pw = 1 - d as i32;
    let magnitude = 10f64.powi(pw);
    (value * magnitude).round() / magnitude
}

/// Number of fraction digits needed to show values of the given magnitude.
#[must_use]
pub fn decimals(value: f64) -> usize {
    let rounded = round_to_next_significant(value);
    if rounded == 0.0 || !rounded.is_finite() {
        return 0;
    }
    let digits = (-rounded.abs().log10()).ceil() as i64 + 2;
    digits.max(0) as usize
}

#[cfg(test)]
mod tests {
    use super::{decimals, round_to_next_significant};

    #[test]
    fn significant_rounding_keeps_one_digit() {
        assert_eq!(round_to_next_significant(0.0345), 0.03);
        assert_eq!(round_to_next_significant(-870.0), -900.0);
        assert_eq!(round_to_next_significant(0.0), 0.0);
    }

    #[test]
    fn decimals_grow_for_small_ranges() {
        assert_eq!(decimals(1000.0), 0);
        assert_eq!(decimals(0.5), 3);
        assert_eq!(decimals(0.01), 4);
        assert_eq!(decimals(f64::NAN), 0);
    }
}
