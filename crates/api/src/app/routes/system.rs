use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

/// Liveness probe. No auth, no store access.
pub async fn health() -> axum::response::Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "message": "Server is running",
            "timestamp": Utc::now(),
        })),
    )
        .into_response()
}
