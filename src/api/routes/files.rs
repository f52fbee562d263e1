use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::api::models::{FilesResponse, SearchResponse};
use crate::api::AppState;
use crate::errors::CostscopeError;

#[derive(Deserialize)]
pub struct FilesQuery {
    pub account: Option<String>,
    #[serde(rename = "type")]
    pub file_type: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub account: Option<String>,
}

pub async fn list_files(
    State(state): State<AppState>,
    Query(query): Query<FilesQuery>,
) -> Json<FilesResponse> {
    let pattern = match &query.file_type {
        Some(file_type) => format!("{}_*.json", file_type),
        None => "*.json".to_string(),
    };

    let mut files = state.store.list_matching(&pattern, query.account.as_deref());

    // Newest first; entries with no modification time sort last.
    files.sort_by(|a, b| {
        b.modified
            .as_deref()
            .unwrap_or("")
            .cmp(a.modified.as_deref().unwrap_or(""))
    });

    let total = files.len();
    Json(FilesResponse { files, total })
}

pub async fn search_files(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, CostscopeError> {
    let q = query.q.unwrap_or_default();
    if q.is_empty() {
        return Err(CostscopeError::BadRequest(
            "Query parameter q is required".to_string(),
        ));
    }

    let pattern = format!("*{}*.json", q);
    let files = state.store.list_matching(&pattern, query.account.as_deref());
    let total = files.len();

    Ok(Json(SearchResponse { files, total, query: q }))
}
