pub mod accounts;
pub mod file;
pub mod files;
pub mod health;
pub mod latest;
pub mod metrics;
pub mod summary;

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// Fallback for unmatched routes.
pub async fn endpoint_not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({"error": "Endpoint not found"})))
}
