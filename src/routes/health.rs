use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// GET /ping - Liveness probe
/// Returns 200 OK if the process is alive
pub async fn ping() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
