pub mod errors;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::store::ReportStore;

/// Account queried when the request does not name one.
pub const DEFAULT_ACCOUNT: &str = "account1";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ReportStore>,
    pub config: Arc<ServerConfig>,
}

pub fn create_app_state(config: ServerConfig) -> AppState {
    AppState {
        store: Arc::new(ReportStore::new(config.data_path.clone())),
        config: Arc::new(config),
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .route("/api/accounts", axum::routing::get(routes::accounts::list_accounts))
        .route("/api/files", axum::routing::get(routes::files::list_files))
        .route("/api/latest-data", axum::routing::get(routes::latest::get_latest_data))
        .route("/api/cost-summary", axum::routing::get(routes::summary::get_cost_summary))
        .route("/api/file/{account}/{filename}", axum::routing::get(routes::file::get_file))
        .route("/api/metrics", axum::routing::get(routes::metrics::get_metrics))
        .route("/api/search", axum::routing::get(routes::files::search_files))
        .fallback(routes::endpoint_not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
