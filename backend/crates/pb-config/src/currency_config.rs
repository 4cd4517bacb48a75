use crate::{ConfigError, ConfigErrorResult, ConfigSection};

use pb_core::{DEFAULT_TTD_PROJECTS, DEFAULT_TTD_RATE, TtdAllowList};

use serde::Deserialize;

/// USD -> TTD enrichment settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    /// Fixed multiplier applied by the converter
    pub ttd_rate: f64,
    /// Project names that get a `finalBudgetTtd`
    pub ttd_projects: Vec<String>,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            ttd_rate: DEFAULT_TTD_RATE,
            ttd_projects: DEFAULT_TTD_PROJECTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CurrencyConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.ttd_rate.is_finite() || self.ttd_rate <= 0.0 {
            return Err(ConfigError::invalid(
                ConfigSection::Currency,
                format!(
                    "currency.ttd_rate must be a positive number, got {}",
                    self.ttd_rate
                ),
            ));
        }

        if self.ttd_projects.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::invalid(
                ConfigSection::Currency,
                "currency.ttd_projects cannot contain blank names",
            ));
        }

        Ok(())
    }

    pub fn allow_list(&self) -> TtdAllowList {
        TtdAllowList::new(self.ttd_projects.iter().cloned())
    }
}
