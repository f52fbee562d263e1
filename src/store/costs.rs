use serde_json::Value;

/// Figures aggregated from one daily-cost document.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyCostSummary {
    pub total_cost: f64,
    pub currency: String,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
}

/// Sum the blended cost across a daily-cost document's time buckets.
///
/// Returns `None` when the document has no `ResultsByTime` array, which
/// excludes the account from summary aggregation. Amounts may arrive as JSON
/// strings or numbers; an unparseable amount contributes nothing to the sum.
pub fn daily_cost_summary(doc: &Value) -> Option<DailyCostSummary> {
    let buckets = doc.get("ResultsByTime")?.as_array()?;

    let total_cost = buckets
        .iter()
        .map(|bucket| {
            bucket
                .pointer("/Total/BlendedCost/Amount")
                .and_then(parse_amount)
                .unwrap_or(0.0)
        })
        .sum();

    let currency = buckets
        .first()
        .and_then(|b| b.pointer("/Total/BlendedCost/Unit"))
        .and_then(Value::as_str)
        .unwrap_or("USD")
        .to_string();
    let period_start = buckets
        .first()
        .and_then(|b| b.pointer("/TimePeriod/Start"))
        .and_then(Value::as_str)
        .map(str::to_string);
    let period_end = buckets
        .last()
        .and_then(|b| b.pointer("/TimePeriod/End"))
        .and_then(Value::as_str)
        .map(str::to_string);

    Some(DailyCostSummary {
        total_cost,
        currency,
        period_start,
        period_end,
    })
}

/// Forecasted total from a cost-forecast document.
pub fn forecast_total(doc: &Value) -> Option<f64> {
    doc.pointer("/Total/Amount").and_then(parse_amount)
}

/// Reservation-instance utilization percentage from a utilization document.
pub fn ri_utilization(doc: &Value) -> Option<f64> {
    doc.pointer("/Total/UtilizationPercentage").and_then(parse_amount)
}

// Cost Explorer exports encode figures as strings ("12.34"), but tolerate
// bare numbers too.
fn parse_amount(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn daily_doc() -> Value {
        json!({
            "ResultsByTime": [
                {
                    "TimePeriod": {"Start": "2025-07-01", "End": "2025-07-02"},
                    "Total": {"BlendedCost": {"Amount": "10.50", "Unit": "USD"}}
                },
                {
                    "TimePeriod": {"Start": "2025-07-02", "End": "2025-07-03"},
                    "Total": {"BlendedCost": {"Amount": "4.25", "Unit": "USD"}}
                }
            ]
        })
    }

    #[test]
    fn test_daily_cost_summary_sums_buckets() {
        let summary = daily_cost_summary(&daily_doc()).unwrap();
        assert!((summary.total_cost - 14.75).abs() < f64::EPSILON);
        assert_eq!(summary.currency, "USD");
        assert_eq!(summary.period_start.as_deref(), Some("2025-07-01"));
        assert_eq!(summary.period_end.as_deref(), Some("2025-07-03"));
    }

    #[test]
    fn test_daily_cost_summary_missing_buckets() {
        assert!(daily_cost_summary(&json!({"Total": {}})).is_none());
        assert!(daily_cost_summary(&json!({"ResultsByTime": "oops"})).is_none());
    }

    #[test]
    fn test_daily_cost_summary_empty_buckets() {
        let summary = daily_cost_summary(&json!({"ResultsByTime": []})).unwrap();
        assert_eq!(summary.total_cost, 0.0);
        assert_eq!(summary.currency, "USD");
        assert!(summary.period_start.is_none());
        assert!(summary.period_end.is_none());
    }

    #[test]
    fn test_daily_cost_summary_unparseable_amount() {
        let summary = daily_cost_summary(&json!({
            "ResultsByTime": [
                {"Total": {"BlendedCost": {"Amount": "not-a-number", "Unit": "EUR"}}},
                {"Total": {"BlendedCost": {"Amount": 2.5}}}
            ]
        }))
        .unwrap();
        assert_eq!(summary.total_cost, 2.5);
        assert_eq!(summary.currency, "EUR");
    }

    #[test]
    fn test_forecast_total() {
        assert_eq!(
            forecast_total(&json!({"Total": {"Amount": "99.75", "Unit": "USD"}})),
            Some(99.75)
        );
        assert_eq!(forecast_total(&json!({"Total": {}})), None);
        assert_eq!(forecast_total(&json!({})), None);
    }

    #[test]
    fn test_ri_utilization() {
        assert_eq!(
            ri_utilization(&json!({"Total": {"UtilizationPercentage": "87.5"}})),
            Some(87.5)
        );
        assert_eq!(
            ri_utilization(&json!({"Total": {"UtilizationPercentage": 92}})),
            Some(92.0)
        );
        assert_eq!(ri_utilization(&json!({})), None);
    }
}
