use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::error;

use crate::errors::CostscopeError;

impl IntoResponse for CostscopeError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            CostscopeError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            CostscopeError::NotFound => (StatusCode::NOT_FOUND, "File not found".to_string()),
            CostscopeError::AccessDenied => (StatusCode::FORBIDDEN, "Access denied".to_string()),
            _ => {
                error!(error = %self, "Request handler failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        (status, Json(json!({"error": message}))).into_response()
    }
}
