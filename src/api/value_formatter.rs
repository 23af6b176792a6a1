use std::fmt;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::YAxis;

/// Converts axis values to label text.
pub trait AxisValueFormatter: fmt::Debug + Send + Sync {
    fn string_for_value(&self, value: f64, axis: &YAxis) -> String;
}

/// Fixed-precision formatter used when the axis has no custom formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultAxisValueFormatter {
    pub decimals: u32,
}

impl DefaultAxisValueFormatter {
    #[must_use]
    pub const fn new(decimals: u32) -> Self {
        Self { decimals }
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        let precision = self.decimals as usize;
        match Decimal::from_f64(value) {
            Some(decimal) => {
                let mut rounded = decimal
                    .round_dp_with_strategy(self.decimals, RoundingStrategy::MidpointAwayFromZero);
                if rounded.is_zero() {
                    rounded.set_sign_positive(true);
                }
                format!("{rounded:.precision$}")
            }
            // Out of decimal range (or non-finite): plain float formatting.
            None => format!("{value:.precision$}"),
        }
    }
}

impl AxisValueFormatter for DefaultAxisValueFormatter {
    fn string_for_value(&self, value: f64, _axis: &YAxis) -> String {
        self.format(value)
    }
}

#[cfg(test)]
mod tests {
    use super::DefaultAxisValueFormatter;

    #[test]
    fn rounds_half_away_from_zero() {
        let formatter = DefaultAxisValueFormatter::new(1);
        assert_eq!(formatter.format(0.25), "0.3");
        assert_eq!(formatter.format(-0.25), "-0.3");
        assert_eq!(formatter.format(12.0), "12.0");
    }

    #[test]
    fn negative_zero_prints_without_sign() {
        let formatter = DefaultAxisValueFormatter::new(2);
        assert_eq!(formatter.format(-0.0001), "0.00");
    }

    #[test]
    fn zero_decimals_prints_integers() {
        let formatter = DefaultAxisValueFormatter::default();
        assert_eq!(formatter.format(1234.6), "1235");
        assert_eq!(formatter.format(0.0), "0");
    }

    #[test]
    fn out_of_range_values_fall_back_to_float_formatting() {
        let formatter = DefaultAxisValueFormatter::new(0);
        assert_eq!(formatter.format(f64::INFINITY), "inf");
    }
}
