use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /locations - Places a calendar can be generated for
pub async fn list(State(app): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "default": app.locations.default_location().name,
        "locations": app.locations.entries(),
    }))
}
