//! Currency conversion seam.
//!
//! Only USD -> TTD is supported. The converter is a trait so a live rate
//! provider can replace [`FixedRateConverter`] without touching handlers.
//!
//! [`FixedRateConverter`]: fixed_rate_converter::FixedRateConverter

pub mod currency_converter;
pub mod fixed_rate_converter;

use chrono::NaiveDate;

pub const USD: &str = "USD";
pub const TTD: &str = "TTD";

/// Round to two decimal places, halves toward positive infinity
/// (`-0.125` becomes `-0.12`, `0.125` becomes `0.13`)
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0 + 0.5).floor() / 100.0
}

/// Rate date for a budget year: January 1st of that year
pub fn as_of_date(year: Option<i32>) -> Option<NaiveDate> {
    year.and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
}
