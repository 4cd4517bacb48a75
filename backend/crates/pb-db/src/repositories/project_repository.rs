//! SQLite-backed [`ProjectStore`].
//!
//! Column names mirror the JSON field names (`projectId`, `projectName`, ...)
//! so the table can be inspected with the same vocabulary the API uses.

use crate::{ProjectStore, Result as DbErrorResult};

use pb_core::{Project, ProjectPatch};

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

const SELECT_COLUMNS: &str = r#"
    SELECT projectId, projectName, year, currency,
        initialBudgetLocal, budgetUsd,
        initialScheduleEstimateMonths, adjustedScheduleEstimateMonths,
        contingencyRate, escalationRate, finalBudgetUsd
    FROM project
"#;

#[derive(Clone)]
pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<Project> {
        Ok(Project {
            project_id: row.try_get("projectId")?,
            project_name: row.try_get("projectName")?,
            year: row.try_get("year")?,
            currency: row.try_get("currency")?,
            initial_budget_local: row.try_get("initialBudgetLocal")?,
            budget_usd: row.try_get("budgetUsd")?,
            initial_schedule_estimate_months: row.try_get("initialScheduleEstimateMonths")?,
            adjusted_schedule_estimate_months: row.try_get("adjustedScheduleEstimateMonths")?,
            contingency_rate: row.try_get("contingencyRate")?,
            escalation_rate: row.try_get("escalationRate")?,
            final_budget_usd: row.try_get("finalBudgetUsd")?,
        })
    }
}

#[async_trait]
impl ProjectStore for ProjectRepository {
    async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY projectId"))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn find_by_id(&self, project_id: i64) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE projectId = ?"))
            .bind(project_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn find_by_name_and_year(&self, name: &str, year: i32) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS} WHERE projectName = ? AND year = ? ORDER BY projectId"
        ))
        .bind(name)
        .bind(year)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn create(&self, project: &Project) -> DbErrorResult<u64> {
        let result = sqlx::query(
            r#"
                INSERT INTO project (
                    projectId, projectName, year, currency,
                    initialBudgetLocal, budgetUsd,
                    initialScheduleEstimateMonths, adjustedScheduleEstimateMonths,
                    contingencyRate, escalationRate, finalBudgetUsd
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.project_id)
        .bind(&project.project_name)
        .bind(project.year)
        .bind(&project.currency)
        .bind(project.initial_budget_local)
        .bind(project.budget_usd)
        .bind(project.initial_schedule_estimate_months)
        .bind(project.adjusted_schedule_estimate_months)
        .bind(project.contingency_rate)
        .bind(project.escalation_rate)
        .bind(project.final_budget_usd)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn update(&self, project_id: i64, patch: &ProjectPatch) -> DbErrorResult<u64> {
        if patch.is_empty() {
            log::debug!("Empty patch for project {}, nothing to write", project_id);
            return Ok(0);
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE project SET ");
        let mut columns = builder.separated(", ");

        if let Some(value) = patch.project_id {
            columns.push("projectId = ").push_bind_unseparated(value);
        }
        if let Some(value) = &patch.project_name {
            columns.push("projectName = ").push_bind_unseparated(value.clone());
        }
        if let Some(value) = patch.year {
            columns.push("year = ").push_bind_unseparated(value);
        }
        if let Some(value) = &patch.currency {
            columns.push("currency = ").push_bind_unseparated(value.clone());
        }
        if let Some(value) = patch.initial_budget_local {
            columns.push("initialBudgetLocal = ").push_bind_unseparated(value);
        }
        if let Some(value) = patch.budget_usd {
            columns.push("budgetUsd = ").push_bind_unseparated(value);
        }
        if let Some(value) = patch.initial_schedule_estimate_months {
            columns
                .push("initialScheduleEstimateMonths = ")
                .push_bind_unseparated(value);
        }
        if let Some(value) = patch.adjusted_schedule_estimate_months {
            columns
                .push("adjustedScheduleEstimateMonths = ")
                .push_bind_unseparated(value);
        }
        if let Some(value) = patch.contingency_rate {
            columns.push("contingencyRate = ").push_bind_unseparated(value);
        }
        if let Some(value) = patch.escalation_rate {
            columns.push("escalationRate = ").push_bind_unseparated(value);
        }
        if let Some(value) = patch.final_budget_usd {
            columns.push("finalBudgetUsd = ").push_bind_unseparated(value);
        }

        builder.push(" WHERE projectId = ").push_bind(project_id);

        let result = builder.build().execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, project_id: i64) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM project WHERE projectId = ?")
            .bind(project_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
