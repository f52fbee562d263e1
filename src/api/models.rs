use serde::{Deserialize, Serialize};

use crate::store::{AccountInfo, FileInfo};

/// Query string shared by the per-account endpoints.
#[derive(Deserialize)]
pub struct AccountQuery {
    pub account: Option<String>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub data_path: String,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct AccountsResponse {
    pub accounts: Vec<AccountInfo>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct FilesResponse {
    pub files: Vec<FileInfo>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub files: Vec<FileInfo>,
    pub total: usize,
    pub query: String,
}

#[derive(Serialize)]
pub struct AccountCostSummary {
    pub account: String,
    pub total_cost: f64,
    pub currency: String,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
}

#[derive(Serialize)]
pub struct CostSummaryResponse {
    pub summaries: Vec<AccountCostSummary>,
    pub total_accounts: usize,
    pub total_cost: f64,
}

/// Dashboard key metrics. `sp_utilization` and `cost_change` have no source
/// report yet and stay at zero.
#[derive(Serialize, Default)]
pub struct MetricsResponse {
    pub total_cost: f64,
    pub forecasted_cost: f64,
    pub ri_utilization: f64,
    pub sp_utilization: f64,
    pub cost_change: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}
