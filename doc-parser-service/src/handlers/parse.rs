use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness payload behind the token gate.
pub async fn parse() -> impl IntoResponse {
    Json(json!({ "message": "Parsing service is alive!" }))
}
