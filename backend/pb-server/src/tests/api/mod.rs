mod budget_currency_request;
mod project_dto;
