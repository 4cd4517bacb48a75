pub mod budget_currency_request;
#[allow(clippy::module_inception)]
pub mod budgets;
pub mod project_dto;
pub mod project_list_response;
