use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - process liveness
pub async fn health() -> Response {
    (StatusCode::OK, Json(json!({ "status": "OK" }))).into_response()
}

/// GET /api/ok
pub async fn api_ok() -> Response {
    (StatusCode::OK, Json(json!({ "ok": true }))).into_response()
}

/// Fallback for unmatched routes
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
}
