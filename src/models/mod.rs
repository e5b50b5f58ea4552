//! Dashboard data model.
//!
//! A [`Snapshot`] bundles everything one generator call produces. Snapshots
//! are replaced wholesale, never merged.

pub mod chart;
pub mod insight;
pub mod metrics;
pub mod order;
pub mod snapshot;
pub mod tone;

pub use chart::{ChartPoint, MONTHS};
pub use insight::{Insight, InsightCategory, InsightImpact};
pub use metrics::MetricsSnapshot;
pub use order::{OrderRecord, OrderStatus, Product};
pub use snapshot::Snapshot;
pub use tone::Tone;
