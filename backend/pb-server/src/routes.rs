use crate::{
    AppState, create_project_budget, delete_project_budget, find_project_budget_by_currency,
    get_project_budget, health, list_conversions, request_logging, update_project_budget,
};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/ok", get(health::api_ok))
        .route("/conversions", get(list_conversions))
        .route("/project/budget", post(create_project_budget))
        .route(
            "/project/budget/currency",
            post(find_project_budget_by_currency),
        )
        .route(
            "/project/budget/{id}",
            get(get_project_budget)
                .put(update_project_budget)
                .delete(delete_project_budget),
        );

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api)
        .fallback(health::not_found)
        .with_state(state)
        .layer(middleware::from_fn(request_logging::log_requests))
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
