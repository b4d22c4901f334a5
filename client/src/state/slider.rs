//! Bounded monthly-bill slider feeding the savings estimator.

#[cfg(test)]
#[path = "slider_test.rs"]
mod slider_test;

use super::savings::{BillAmount, EstimateResult, estimate};

pub const BILL_MIN: BillAmount = 50;
pub const BILL_MAX: BillAmount = 400;
pub const BILL_STEP: BillAmount = 1;
pub const BILL_DEFAULT: BillAmount = 142;

/// Slider position in whole USD, always within `[BILL_MIN, BILL_MAX]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderInput {
    value: BillAmount,
}

impl Default for SliderInput {
    fn default() -> Self {
        Self { value: BILL_DEFAULT }
    }
}

impl SliderInput {
    #[must_use]
    pub fn new(value: BillAmount) -> Self {
        Self { value: value.clamp(BILL_MIN, BILL_MAX) }
    }

    #[must_use]
    pub fn value(self) -> BillAmount {
        self.value
    }

    /// Move the slider, clamping to the allowed range.
    pub fn set(&mut self, value: BillAmount) {
        self.value = value.clamp(BILL_MIN, BILL_MAX);
    }

    /// Apply a raw `<input type="range">` value. Unparsable input is ignored.
    pub fn set_from_input(&mut self, raw: &str) {
        let Ok(parsed) = raw.trim().parse::<f64>() else {
            return;
        };
        if !parsed.is_finite() {
            return;
        }
        let clamped = parsed.round().clamp(f64::from(BILL_MIN), f64::from(BILL_MAX));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        self.set(clamped as BillAmount);
    }

    /// Track fill for the `--value` CSS custom property, `0.0..=100.0`.
    #[must_use]
    pub fn fill_percent(self) -> f64 {
        f64::from(self.value - BILL_MIN) / f64::from(BILL_MAX - BILL_MIN) * 100.0
    }

    #[must_use]
    pub fn estimate(self) -> EstimateResult {
        estimate(self.value)
    }
}
