use axum::{
    extract::{Query, State},
    Json,
};

use crate::api::models::{AccountQuery, MetricsResponse};
use crate::api::{AppState, DEFAULT_ACCOUNT};
use crate::store::{costs, loader};

/// Key dashboard figures for one account. Every field defaults to zero when
/// its source report is missing or malformed.
pub async fn get_metrics(
    State(state): State<AppState>,
    Query(query): Query<AccountQuery>,
) -> Json<MetricsResponse> {
    let account = query.account.as_deref().unwrap_or(DEFAULT_ACCOUNT);

    let mut metrics = MetricsResponse::default();

    if let Some(path) = state.store.find_latest("daily_costs_*.json", Some(account)) {
        if let Some(doc) = loader::load_json_soft(&path) {
            if let Some(summary) = costs::daily_cost_summary(&doc) {
                metrics.total_cost = summary.total_cost;
                metrics.last_updated =
                    state.store.file_info(&path).and_then(|info| info.modified);
            }
        }
    }

    if let Some(path) = state.store.find_latest("cost_forecast_*.json", Some(account)) {
        if let Some(doc) = loader::load_json_soft(&path) {
            if let Some(total) = costs::forecast_total(&doc) {
                metrics.forecasted_cost = total;
            }
        }
    }

    if let Some(path) = state.store.find_latest("ri_utilization_*.json", Some(account)) {
        if let Some(doc) = loader::load_json_soft(&path) {
            if let Some(pct) = costs::ri_utilization(&doc) {
                metrics.ri_utilization = pct;
            }
        }
    }

    Json(metrics)
}
