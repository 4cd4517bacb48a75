//! Project budget REST API handlers

use crate::{
    ApiError, ApiResult, AppState, BudgetCurrencyRequest, JsonBody, ProjectDto,
    ProjectListResponse, SuccessResponse,
    api::enrichment::{enrich_all, enrich_project, is_allow_listed},
    api::resolve::parse_project_id,
};

use pb_core::ProjectPatch;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/project/budget/currency
///
/// Look up projects by name and year. `finalBudgetTtd` is attached only when
/// the project is allow-listed and the requested currency is TTD.
pub async fn find_project_budget_by_currency(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<BudgetCurrencyRequest>,
) -> ApiResult<Json<ProjectListResponse>> {
    let (name, year) = request
        .lookup_key()
        .ok_or_else(|| ApiError::validation("year and projectName required", None))?;

    let projects = state.store.find_by_name_and_year(name, year).await?;
    if projects.is_empty() {
        return Err(ApiError::not_found("Project not found"));
    }

    log::debug!(
        "Currency lookup for '{}' ({}): {} match(es)",
        name,
        year,
        projects.len()
    );

    let targets_ttd = request.targets_ttd();
    let data = enrich_all(&state, projects, |project| {
        targets_ttd && is_allow_listed(&state, project)
    })
    .await;

    Ok(Json(ProjectListResponse::new(data)))
}

/// GET /api/project/budget/{id}
pub async fn get_project_budget(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectDto>> {
    let project = match parse_project_id(&id) {
        Some(project_id) => state.store.find_by_id(project_id).await?,
        None => None,
    }
    .ok_or_else(|| ApiError::not_found("Project not found"))?;

    let convert = is_allow_listed(&state, &project);
    Ok(Json(enrich_project(&state, project, convert).await))
}

/// POST /api/project/budget
pub async fn create_project_budget(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<ProjectPatch>,
) -> ApiResult<(StatusCode, Json<SuccessResponse>)> {
    let project = body.into_project()?;

    state.store.create(&project).await?;
    log::info!("Created project {}", project.project_id);

    Ok((StatusCode::CREATED, Json(SuccessResponse::ok())))
}

/// PUT /api/project/budget/{id}
///
/// Partial update. Unknown ids and empty bodies succeed without writing.
pub async fn update_project_budget(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<ProjectPatch>,
) -> ApiResult<Json<SuccessResponse>> {
    let Some(project_id) = parse_project_id(&id) else {
        return Ok(Json(SuccessResponse::ok()));
    };

    let rows = state.store.update(project_id, &patch).await?;
    log::info!("Updated project {} ({} row(s))", project_id, rows);

    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /api/project/budget/{id}
///
/// Unknown ids succeed without writing.
pub async fn delete_project_budget(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessResponse>> {
    let Some(project_id) = parse_project_id(&id) else {
        return Ok(Json(SuccessResponse::ok()));
    };

    let rows = state.store.delete(project_id).await?;
    log::info!("Deleted project {} ({} row(s))", project_id, rows);

    Ok(Json(SuccessResponse::ok()))
}
