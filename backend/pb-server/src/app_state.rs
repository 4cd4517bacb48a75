use pb_config::Config;
use pb_core::{CurrencyConverter, FixedRateConverter, TtdAllowList};
use pb_db::{ProjectRepository, ProjectStore};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for REST handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProjectStore>,
    pub converter: Arc<dyn CurrencyConverter>,
    pub ttd_projects: Arc<TtdAllowList>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ProjectStore>,
        converter: Arc<dyn CurrencyConverter>,
        ttd_projects: TtdAllowList,
    ) -> Self {
        Self {
            store,
            converter,
            ttd_projects: Arc::new(ttd_projects),
        }
    }

    /// Wire the SQLite repository and the fixed-rate converter from config
    pub fn from_config(pool: SqlitePool, config: &Config) -> Self {
        Self::new(
            Arc::new(ProjectRepository::new(pool)),
            Arc::new(FixedRateConverter::new(config.currency.ttd_rate)),
            config.currency.allow_list(),
        )
    }
}
