use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use log::{debug, info, warn};

/// Log one line per request with status and duration
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    debug!("[{} {}] -> handler", method, path);

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis();

    if status.is_server_error() {
        warn!("[{} {}] {} ({}ms)", method, path, status, elapsed_ms);
    } else {
        info!("[{} {}] {} ({}ms)", method, path, status, elapsed_ms);
    }

    response
}
