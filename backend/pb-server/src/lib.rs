pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_logging;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    budgets::{
        budget_currency_request::BudgetCurrencyRequest,
        budgets::{
            create_project_budget, delete_project_budget, find_project_budget_by_currency,
            get_project_budget, update_project_budget,
        },
        project_dto::ProjectDto,
        project_list_response::ProjectListResponse,
    },
    conversions::conversions::list_conversions,
    error::ApiError,
    error::Result as ApiResult,
    extractors::json_body::JsonBody,
    success_response::SuccessResponse,
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;
