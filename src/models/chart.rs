use serde::{Deserialize, Serialize};

/// Month labels in chronological order. One chart point is emitted per label.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Monthly revenue/profit/customer figures for the chart panel.
///
/// `profit` is always between 20% and 50% of `revenue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub revenue: u64,
    pub profit: u64,
    pub customers: u64,
}

impl ChartPoint {
    pub fn new(name: &str, revenue: u64, profit: u64, customers: u64) -> Self {
        Self {
            name: name.to_string(),
            revenue,
            profit,
            customers,
        }
    }

    /// Profit as a fraction of revenue, 0.0 when revenue is zero.
    pub fn margin(&self) -> f64 {
        if self.revenue == 0 {
            return 0.0;
        }
        self.profit as f64 / self.revenue as f64
    }
}
