use pb_core::Project;

use serde::Serialize;

/// Project as returned by the API.
///
/// `final_budget_ttd` is tri-state: `None` omits the key, `Some(None)`
/// renders `null`, `Some(Some(x))` renders the amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    #[serde(flatten)]
    pub project: Project,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_budget_ttd: Option<Option<f64>>,
}

impl ProjectDto {
    pub fn plain(project: Project) -> Self {
        Self {
            project,
            final_budget_ttd: None,
        }
    }

    pub fn with_ttd(project: Project, final_budget_ttd: Option<f64>) -> Self {
        Self {
            project,
            final_budget_ttd: Some(final_budget_ttd),
        }
    }
}
