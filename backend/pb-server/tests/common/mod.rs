#![allow(dead_code)]

//! Test infrastructure for pb-server API tests

use pb_core::{
    CoreError, CoreResult, CurrencyConverter, ErrorLocation, FixedRateConverter, Project,
    TtdAllowList,
};
use pb_db::ProjectRepository;
use pb_server::{AppState, build_router};

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

pub const TEST_TTD_RATE: f64 = 7.0;

/// Create a test pool with in-memory SQLite.
///
/// One connection only: every `:memory:` connection is its own database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    pb_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// AppState over a fresh database with the fixed 7.0 rate
pub async fn create_test_app_state() -> (AppState, SqlitePool) {
    let pool = create_test_pool().await;
    let state = state_for(
        pool.clone(),
        Arc::new(FixedRateConverter::new(TEST_TTD_RATE)),
    );
    (state, pool)
}

pub fn state_for(pool: SqlitePool, converter: Arc<dyn CurrencyConverter>) -> AppState {
    AppState::new(
        Arc::new(ProjectRepository::new(pool)),
        converter,
        TtdAllowList::default(),
    )
}

/// Converter that always fails
pub struct FailingConverter;

#[async_trait]
impl CurrencyConverter for FailingConverter {
    async fn convert_to_ttd(
        &self,
        _amount: f64,
        source_currency: &str,
        _as_of: Option<NaiveDate>,
    ) -> CoreResult<f64> {
        Err(CoreError::Conversion {
            from: source_currency.to_string(),
            to: "TTD".to_string(),
            message: "rate service unavailable".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Insert a project straight through the store
pub async fn seed(state: &AppState, project: Project) {
    state
        .store
        .create(&project)
        .await
        .expect("Failed to seed project");
}

pub fn create_test_project(id: i64, name: &str, year: i32, final_budget_usd: f64) -> Project {
    Project {
        project_name: Some(name.to_string()),
        year: Some(year),
        currency: Some("EUR".to_string()),
        initial_budget_local: Some(final_budget_usd * 0.8),
        budget_usd: Some(final_budget_usd * 0.9),
        initial_schedule_estimate_months: Some(12),
        adjusted_schedule_estimate_months: Some(14),
        contingency_rate: Some(2.5),
        escalation_rate: Some(1.5),
        final_budget_usd: Some(final_budget_usd),
        ..Project::new(id)
    }
}

pub fn peking_duck_project() -> Project {
    create_test_project(1, "Peking roasted duck Chanel", 2024, 247106.75)
}

pub fn non_ttd_project() -> Project {
    create_test_project(2, "Non TTD Project", 2024, 1000.0)
}

/// Send one request through a fresh router and decode the JSON body.
/// An empty body decodes to `Value::Null`.
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let app = build_router(state.clone());

    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
