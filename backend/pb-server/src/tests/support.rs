//! In-process stand-ins for the store and converter

use crate::AppState;

use pb_core::{
    CoreError, CoreResult, CurrencyConverter, ErrorLocation, FixedRateConverter, Project,
    ProjectPatch, TtdAllowList,
};
use pb_db::{ProjectStore, Result as DbErrorResult};

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

/// Store that holds nothing; enrichment never touches it
pub struct EmptyStore;

#[async_trait]
impl ProjectStore for EmptyStore {
    async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _project_id: i64) -> DbErrorResult<Option<Project>> {
        Ok(None)
    }

    async fn find_by_name_and_year(&self, _name: &str, _year: i32) -> DbErrorResult<Vec<Project>> {
        Ok(Vec::new())
    }

    async fn create(&self, _project: &Project) -> DbErrorResult<u64> {
        Ok(1)
    }

    async fn update(&self, _project_id: i64, _patch: &ProjectPatch) -> DbErrorResult<u64> {
        Ok(0)
    }

    async fn delete(&self, _project_id: i64) -> DbErrorResult<u64> {
        Ok(0)
    }
}

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

pub fn state_with(converter: Arc<dyn CurrencyConverter>) -> AppState {
    AppState::new(Arc::new(EmptyStore), converter, TtdAllowList::default())
}

pub fn fixed_rate_state() -> AppState {
    state_with(Arc::new(FixedRateConverter::new(7.0)))
}

pub fn project(id: i64, name: &str, year: i32, final_budget_usd: Option<f64>) -> Project {
    Project {
        project_id: id,
        project_name: Some(name.to_string()),
        year: Some(year),
        currency: Some("EUR".to_string()),
        final_budget_usd,
        ..Project::new(id)
    }
}
