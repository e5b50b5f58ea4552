//! Dashboard orchestration.
//!
//! [`Dashboard`] owns the current snapshot and every piece of view state
//! (filters, chart panel, table search/sort/page, expanded insights, pending
//! notices) and derives the read-only views the widgets render:
//!
//! - [`cards`] - Metric cards
//! - [`chart`] - Chart panel type, tab and zoom
//! - [`table`] - The order table page
//! - [`insights`] - Insight list with expansion flags
//! - [`filters`] - Filter bar selection
//! - [`notice`] - User-facing notifications

pub mod cards;
pub mod chart;
pub mod filters;
pub mod insights;
pub mod notice;
mod orchestrator;
pub mod table;

pub use cards::{metric_cards, MetricCard, Trend};
pub use chart::{pie_slices, ChartState, ChartTab, ChartType, ChartView, PieSlice};
pub use filters::{ChannelFilter, DateRange, FilterState, ProductFilter, RegionFilter};
pub use insights::{ExpandedInsights, InsightView};
pub use notice::{Notice, Severity};
pub use orchestrator::Dashboard;
pub use table::{ColumnHeader, TableView, ORDER_COLUMNS};
