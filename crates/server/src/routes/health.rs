use axum::http::StatusCode;

/// Simple endpoint that returns a fixed message when the service is running
#[utoipa::path(
    get,
    path = "/api/hotel/health",
    responses(
        (status = 200, description = "Service is healthy", content_type = "text/plain", body = String)
    ),
    tag = "Health"
)]
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Hotel Management System is running!")
}
