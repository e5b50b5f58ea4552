use serde::{Deserialize, Serialize};

/// Headline KPIs shown on the metric cards.
///
/// Every field is sampled independently, so the values are not internally
/// consistent (e.g. `total_orders` has no relation to `total_revenue`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub total_revenue: u64,
    pub revenue_change_pct: f64,
    pub conversion_rate_pct: f64,
    pub conversion_change_pct: f64,
    pub active_users: u64,
    pub users_change_pct: f64,
    pub total_orders: u64,
    pub orders_change_pct: f64,
}
