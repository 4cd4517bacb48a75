use crate::CoreResult;

use async_trait::async_trait;
use chrono::NaiveDate;

/// Converts an amount into Trinidad and Tobago dollars.
///
/// `source_currency` and `as_of` identify the rate to use; implementations
/// backed by a fixed rate may ignore them. Failures are returned as
/// `CoreError::Conversion` and must never panic.
#[async_trait]
pub trait CurrencyConverter: Send + Sync {
    async fn convert_to_ttd(
        &self,
        amount: f64,
        source_currency: &str,
        as_of: Option<NaiveDate>,
    ) -> CoreResult<f64>;
}
