//! Project entity - a capital-project budget record for a given year.

use crate::ProjectPatch;

use serde::{Deserialize, Serialize};

/// A budget record keyed by `project_id`.
///
/// Every column except the key is nullable in storage, so every field other
/// than `project_id` is optional and serializes as `null` when unset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_id: i64,
    pub project_name: Option<String>,
    pub year: Option<i32>,
    /// ISO-like currency code of the local budget (e.g. "EUR")
    pub currency: Option<String>,
    pub initial_budget_local: Option<f64>,
    pub budget_usd: Option<f64>,
    pub initial_schedule_estimate_months: Option<i32>,
    pub adjusted_schedule_estimate_months: Option<i32>,
    /// Percentage
    pub contingency_rate: Option<f64>,
    /// Percentage
    pub escalation_rate: Option<f64>,
    pub final_budget_usd: Option<f64>,
}

impl Project {
    /// Create an otherwise empty project with the given key
    pub fn new(project_id: i64) -> Self {
        Self {
            project_id,
            ..Default::default()
        }
    }

    /// Apply a partial update in place. Absent patch fields leave the
    /// current value untouched.
    pub fn apply(&mut self, patch: &ProjectPatch) {
        if let Some(id) = patch.project_id {
            self.project_id = id;
        }
        if patch.project_name.is_some() {
            self.project_name.clone_from(&patch.project_name);
        }
        if patch.year.is_some() {
            self.year = patch.year;
        }
        if patch.currency.is_some() {
            self.currency.clone_from(&patch.currency);
        }
        if patch.initial_budget_local.is_some() {
            self.initial_budget_local = patch.initial_budget_local;
        }
        if patch.budget_usd.is_some() {
            self.budget_usd = patch.budget_usd;
        }
        if patch.initial_schedule_estimate_months.is_some() {
            self.initial_schedule_estimate_months = patch.initial_schedule_estimate_months;
        }
        if patch.adjusted_schedule_estimate_months.is_some() {
            self.adjusted_schedule_estimate_months = patch.adjusted_schedule_estimate_months;
        }
        if patch.contingency_rate.is_some() {
            self.contingency_rate = patch.contingency_rate;
        }
        if patch.escalation_rate.is_some() {
            self.escalation_rate = patch.escalation_rate;
        }
        if patch.final_budget_usd.is_some() {
            self.final_budget_usd = patch.final_budget_usd;
        }
    }
}
