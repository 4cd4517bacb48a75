use pb_core::TTD;

use serde::Deserialize;

/// Request body for `POST /api/project/budget/currency`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BudgetCurrencyRequest {
    pub year: Option<i32>,
    pub project_name: Option<String>,
    /// Target currency. Omitted means TTD.
    pub currency: Option<String>,
}

impl BudgetCurrencyRequest {
    /// `(name, year)` when both are present and non-zero/non-empty
    pub fn lookup_key(&self) -> Option<(&str, i32)> {
        let year = self.year.filter(|y| *y != 0)?;
        let name = self.project_name.as_deref().filter(|n| !n.is_empty())?;
        Some((name, year))
    }

    pub fn targets_ttd(&self) -> bool {
        self.currency
            .as_deref()
            .is_none_or(|c| c.trim().eq_ignore_ascii_case(TTD))
    }
}
