//! `finalBudgetTtd` enrichment.
//!
//! A project outside the allow-list gets no `finalBudgetTtd` key at all.
//! An allow-listed project always gets the key: the converted amount on
//! success, `null` when there is nothing to convert or the converter fails.

use crate::{AppState, ProjectDto};

use pb_core::{Project, USD, as_of_date, round_to_cents};

use futures::future::join_all;

/// Enrich one project. `convert` is the caller's gate decision.
pub async fn enrich_project(state: &AppState, project: Project, convert: bool) -> ProjectDto {
    if !convert {
        return ProjectDto::plain(project);
    }

    let final_budget_ttd = convert_final_budget(state, &project).await;
    ProjectDto::with_ttd(project, final_budget_ttd)
}

/// Enrich every project concurrently. Output order matches input order.
pub async fn enrich_all<F>(state: &AppState, projects: Vec<Project>, gate: F) -> Vec<ProjectDto>
where
    F: Fn(&Project) -> bool,
{
    let futures = projects.into_iter().map(|project| {
        let convert = gate(&project);
        enrich_project(state, project, convert)
    });

    join_all(futures).await
}

/// Allow-list rule shared by every endpoint
pub fn is_allow_listed(state: &AppState, project: &Project) -> bool {
    state.ttd_projects.admits(project.project_name.as_deref())
}

async fn convert_final_budget(state: &AppState, project: &Project) -> Option<f64> {
    let amount = project.final_budget_usd?;

    match state
        .converter
        .convert_to_ttd(amount, USD, as_of_date(project.year))
        .await
    {
        Ok(converted) => Some(round_to_cents(converted)),
        Err(e) => {
            log::warn!(
                "TTD conversion failed for project {}: {}",
                project.project_id,
                e
            );
            None
        }
    }
}
