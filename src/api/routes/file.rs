use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::api::AppState;
use crate::errors::CostscopeError;

/// Serve one report file's bytes verbatim.
///
/// The store refuses paths that resolve outside the data root, so traversal
/// attempts come back 403 before any existence check.
pub async fn get_file(
    State(state): State<AppState>,
    Path((account, filename)): Path<(String, String)>,
) -> Result<impl IntoResponse, CostscopeError> {
    let path = state.store.resolve_file(&account, &filename)?;
    let bytes = tokio::fs::read(&path).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], bytes))
}
