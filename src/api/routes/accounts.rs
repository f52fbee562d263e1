use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::error;

use crate::api::models::AccountsResponse;
use crate::api::AppState;

pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<AccountsResponse>, (StatusCode, Json<Value>)> {
    let accounts = state.store.list_accounts().map_err(|e| {
        error!(error = %e, "Failed to enumerate account directories");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "Internal server error"})))
    })?;

    let total = accounts.len();
    Ok(Json(AccountsResponse { accounts, total }))
}
