use crate::{CoreError, CoreResult, CurrencyConverter, TTD};

use std::panic::Location;

use async_trait::async_trait;
use chrono::NaiveDate;
use error_location::ErrorLocation;

/// Default USD -> TTD multiplier
pub const DEFAULT_TTD_RATE: f64 = 7.0;

/// Converter that applies one multiplicative rate regardless of date
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRateConverter {
    rate: f64,
}

impl FixedRateConverter {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Default for FixedRateConverter {
    fn default() -> Self {
        Self::new(DEFAULT_TTD_RATE)
    }
}

#[async_trait]
impl CurrencyConverter for FixedRateConverter {
    async fn convert_to_ttd(
        &self,
        amount: f64,
        source_currency: &str,
        _as_of: Option<NaiveDate>,
    ) -> CoreResult<f64> {
        let converted = amount * self.rate;

        if !converted.is_finite() {
            return Err(CoreError::Conversion {
                from: source_currency.to_string(),
                to: TTD.to_string(),
                message: format!("{} x {} is not a finite amount", amount, self.rate),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(converted)
    }
}
