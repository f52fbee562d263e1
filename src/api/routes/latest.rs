use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;

use crate::api::models::AccountQuery;
use crate::api::{AppState, DEFAULT_ACCOUNT};
use crate::store::loader;

/// Report-type glob patterns backing the dashboard payload, keyed by the
/// response field each one populates.
const REPORT_TYPES: &[(&str, &str)] = &[
    ("daily_costs", "daily_costs_*.json"),
    ("service_costs", "monthly_costs_by_service_*.json"),
    ("region_costs", "costs_by_region_*.json"),
    ("forecast", "cost_forecast_*.json"),
    ("ri_utilization", "ri_utilization_*.json"),
];

/// Latest document of every known report type for one account. Types with no
/// matching file are omitted from the response.
pub async fn get_latest_data(
    State(state): State<AppState>,
    Query(query): Query<AccountQuery>,
) -> Json<Value> {
    let account = query.account.as_deref().unwrap_or(DEFAULT_ACCOUNT);

    let mut data = serde_json::Map::new();
    for (key, pattern) in REPORT_TYPES {
        if let Some(path) = state.store.find_latest(pattern, Some(account)) {
            let doc = loader::load_json_soft(&path).unwrap_or(Value::Null);
            data.insert((*key).to_string(), doc);
        }
    }

    Json(Value::Object(data))
}
