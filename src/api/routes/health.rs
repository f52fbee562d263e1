use axum::{extract::State, Json};

use crate::api::models::HealthResponse;
use crate::api::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now().to_rfc3339(),
        data_path: state.config.data_path.display().to_string(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
