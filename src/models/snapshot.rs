use serde::{Deserialize, Serialize};

use super::{ChartPoint, Insight, MetricsSnapshot, OrderRecord};

/// Everything a single generation produces.
///
/// The default value is the zeroed snapshot shown before the first load
/// succeeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub metrics: MetricsSnapshot,
    pub chart: Vec<ChartPoint>,
    pub insights: Vec<Insight>,
    pub table_data: Vec<OrderRecord>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.chart.is_empty() && self.insights.is_empty() && self.table_data.is_empty()
    }
}
