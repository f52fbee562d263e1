use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::api::models::{AccountCostSummary, CostSummaryResponse};
use crate::api::AppState;
use crate::store::{costs, loader};

/// Per-account daily-cost totals plus a grand total. Accounts without a
/// loadable daily-cost document carrying time buckets are skipped.
pub async fn get_cost_summary(
    State(state): State<AppState>,
) -> Result<Json<CostSummaryResponse>, (StatusCode, Json<Value>)> {
    let accounts = state.store.account_names().map_err(|e| {
        error!(error = %e, "Failed to enumerate account directories");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "Internal server error"})))
    })?;

    let mut summaries = Vec::new();
    for account in accounts {
        let Some(path) = state.store.find_latest("daily_costs_*.json", Some(&account)) else {
            continue;
        };
        let Some(doc) = loader::load_json_soft(&path) else {
            continue;
        };
        let Some(summary) = costs::daily_cost_summary(&doc) else {
            debug!(account = %account, "Daily-cost document has no time buckets");
            continue;
        };

        summaries.push(AccountCostSummary {
            account,
            total_cost: summary.total_cost,
            currency: summary.currency,
            period_start: summary.period_start,
            period_end: summary.period_end,
        });
    }

    let total_cost = summaries.iter().map(|s| s.total_cost).sum();
    let total_accounts = summaries.len();

    Ok(Json(CostSummaryResponse {
        summaries,
        total_accounts,
        total_cost,
    }))
}
