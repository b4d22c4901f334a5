//! Solar savings estimate derived from a monthly electricity bill.
//!
//! DESIGN
//! ======
//! `estimate` is a pure function recomputed on every slider change. The
//! arithmetic is kept literal (including the payback expression) so the
//! numbers match what the site has always shown for a given bill.

#[cfg(test)]
#[path = "savings_test.rs"]
mod savings_test;

/// Share of the yearly bill the installed system is expected to offset.
pub const SAVINGS_RATE: f64 = 0.85;

/// Smallest system the business quotes, in panels.
pub const MIN_PANEL_COUNT: u64 = 6;

/// Monthly bill covered by one panel, in USD.
pub const BILL_PER_PANEL: f64 = 12.0;

/// Reference system cost expressed as years of the current bill.
pub const SYSTEM_COST_YEARS: f64 = 6.0;

/// Monthly electricity cost in whole USD.
pub type BillAmount = u32;

/// Years until the system pays for itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Payback {
    /// Rounded to one decimal place.
    Years(f64),
    /// No savings to pay the system back with (a zero bill).
    NotApplicable,
}

impl Payback {
    /// Display text without units: `"0.6"` or `"n/a"`.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Years(years) => format!("{years:.1}"),
            Self::NotApplicable => "n/a".to_owned(),
        }
    }

    #[must_use]
    pub fn years(self) -> Option<f64> {
        match self {
            Self::Years(years) => Some(years),
            Self::NotApplicable => None,
        }
    }
}

/// Everything the calculator card shows for one bill amount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimateResult {
    pub yearly_savings: u64,
    pub panel_count: u64,
    pub payback: Payback,
    pub monthly_savings: u64,
}

/// Estimate savings for a monthly `bill`.
///
/// Any bill is accepted; callers are expected to clamp to the slider range
/// but nothing here depends on it.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn estimate(bill: BillAmount) -> EstimateResult {
    let bill = f64::from(bill);
    let yearly_savings = (bill * 12.0 * SAVINGS_RATE).round() as u64;
    let panel_count = ((bill / BILL_PER_PANEL).round() as u64).max(MIN_PANEL_COUNT);
    let monthly_savings = (yearly_savings as f64 / 12.0).round() as u64;

    let payback = if yearly_savings == 0 {
        Payback::NotApplicable
    } else {
        let raw = bill * 12.0 * SYSTEM_COST_YEARS / yearly_savings as f64 / 12.0;
        Payback::Years(round1(raw))
    };

    EstimateResult { yearly_savings, panel_count, payback, monthly_savings }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Format whole dollars with thousands separators (`1448` -> `"1,448"`).
#[must_use]
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
