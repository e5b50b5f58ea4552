use serde::Serialize;

use crate::models::{MetricsSnapshot, Tone};
use crate::utils::{format_currency, format_number, format_percentage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Zero counts as up.
    pub fn from_change(change: f64) -> Self {
        if change >= 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Up => Tone::Green,
            Self::Down => Tone::Red,
        }
    }
}

/// One KPI card, ready to display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    pub change: f64,
    pub change_label: String,
    pub trend: Trend,
    pub tone: Tone,
    pub tooltip: &'static str,
}

impl MetricCard {
    fn new(
        title: &'static str,
        value: String,
        change: f64,
        tone: Tone,
        tooltip: &'static str,
    ) -> Self {
        Self {
            title,
            value,
            change,
            change_label: format_percentage(change.abs()),
            trend: Trend::from_change(change),
            tone,
            tooltip,
        }
    }
}

/// The four headline cards, in display order.
pub fn metric_cards(metrics: &MetricsSnapshot) -> [MetricCard; 4] {
    [
        MetricCard::new(
            "Total Revenue",
            format_currency(metrics.total_revenue as f64),
            metrics.revenue_change_pct,
            Tone::Blue,
            "Total revenue across all products and channels",
        ),
        MetricCard::new(
            "Conversion Rate",
            format!("{:.2}%", metrics.conversion_rate_pct),
            metrics.conversion_change_pct,
            Tone::Purple,
            "Percentage of visitors who completed a purchase",
        ),
        MetricCard::new(
            "Active Users",
            format_number(metrics.active_users as i64),
            metrics.users_change_pct,
            Tone::Green,
            "Number of unique active users in the current period",
        ),
        MetricCard::new(
            "Total Orders",
            format_number(metrics.total_orders as i64),
            metrics.orders_change_pct,
            Tone::Orange,
            "Total number of orders in the current period",
        ),
    ]
}
