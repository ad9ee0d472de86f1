use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness payload behind the token gate.
pub async fn generate() -> impl IntoResponse {
    Json(json!({ "message": "Document service is alive!" }))
}
