use crate::{
    ApiResult, AppState, ProjectListResponse,
    api::enrichment::{enrich_all, is_allow_listed},
};

use axum::{Json, extract::State};

/// GET /api/conversions
///
/// Every project, with `finalBudgetTtd` on the allow-listed ones.
pub async fn list_conversions(
    State(state): State<AppState>,
) -> ApiResult<Json<ProjectListResponse>> {
    let projects = state.store.find_all().await?;
    let data = enrich_all(&state, projects, |project| is_allow_listed(&state, project)).await;

    Ok(Json(ProjectListResponse::new(data)))
}
