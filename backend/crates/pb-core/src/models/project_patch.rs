use crate::{CoreError, CoreResult, Project};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Partial project body used for both create and update requests.
///
/// `null` and a missing key are treated the same: the field is not written.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub project_id: Option<i64>,
    pub project_name: Option<String>,
    pub year: Option<i32>,
    pub currency: Option<String>,
    pub initial_budget_local: Option<f64>,
    pub budget_usd: Option<f64>,
    pub initial_schedule_estimate_months: Option<i32>,
    pub adjusted_schedule_estimate_months: Option<i32>,
    pub contingency_rate: Option<f64>,
    pub escalation_rate: Option<f64>,
    pub final_budget_usd: Option<f64>,
}

impl ProjectPatch {
    /// True when no field would be written
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Turn a create body into a full project. A missing or zero
    /// `projectId` is rejected.
    #[track_caller]
    pub fn into_project(self) -> CoreResult<Project> {
        let project_id = match self.project_id {
            Some(id) if id != 0 => id,
            _ => {
                return Err(CoreError::Validation {
                    message: "projectId required".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        let mut project = Project::new(project_id);
        project.apply(&self);
        Ok(project)
    }
}
