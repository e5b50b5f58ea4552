//! Mock analytics data generator.
//!
//! Fabricates a complete [`Snapshot`] from bounded uniform distributions:
//!
//! - [`ranges`] - Sampling bounds for every generated field
//! - [`catalog`] - The fixed insight catalog

pub mod catalog;
pub mod ranges;

use anyhow::Result;
use chrono::{Days, NaiveDate, Utc};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GeneratorSettings;
use crate::models::{
    ChartPoint, MetricsSnapshot, OrderRecord, OrderStatus, Product, Snapshot, MONTHS,
};

/// Anything that can produce a dashboard snapshot.
///
/// The mock generator never fails, but the dashboard treats every source as
/// fallible so a real backend can be slotted in without changing its error
/// handling.
pub trait SnapshotSource: Send {
    fn generate(&mut self, today: NaiveDate) -> Result<Snapshot>;
}

/// Random snapshot generator.
///
/// Deterministic given its seed and the `today` it is asked to generate for.
pub struct MockDataGenerator {
    rng: StdRng,
    order_count: usize,
}

impl Default for MockDataGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDataGenerator {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            order_count: ranges::DEFAULT_ORDER_COUNT,
        }
    }

    /// Generator with a pinned seed, for reproducible runs and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            order_count: ranges::DEFAULT_ORDER_COUNT,
        }
    }

    pub fn from_settings(settings: &GeneratorSettings) -> Self {
        let generator = match settings.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        };
        generator.with_order_count(settings.order_count)
    }

    pub fn with_order_count(mut self, order_count: usize) -> Self {
        self.order_count = order_count;
        self
    }

    /// Snapshot dated relative to the current UTC day.
    pub fn generate_now(&mut self) -> Snapshot {
        self.generate_at(Utc::now().date_naive())
    }

    pub fn generate_at(&mut self, today: NaiveDate) -> Snapshot {
        let snapshot = Snapshot {
            metrics: self.metrics(),
            chart: self.chart(),
            insights: catalog::insights(),
            table_data: self.orders(today),
        };

        debug!(
            "Generated snapshot: revenue={}, {} chart points, {} orders",
            snapshot.metrics.total_revenue,
            snapshot.chart.len(),
            snapshot.table_data.len()
        );

        snapshot
    }

    pub fn metrics(&mut self) -> MetricsSnapshot {
        let rng = &mut self.rng;
        MetricsSnapshot {
            total_revenue: rng.gen_range(ranges::TOTAL_REVENUE),
            revenue_change_pct: rng.gen_range(ranges::REVENUE_CHANGE_PCT),
            conversion_rate_pct: rng.gen_range(ranges::CONVERSION_RATE_PCT),
            conversion_change_pct: rng.gen_range(ranges::CONVERSION_CHANGE_PCT),
            active_users: rng.gen_range(ranges::ACTIVE_USERS),
            users_change_pct: rng.gen_range(ranges::USERS_CHANGE_PCT),
            total_orders: rng.gen_range(ranges::TOTAL_ORDERS),
            orders_change_pct: rng.gen_range(ranges::ORDERS_CHANGE_PCT),
        }
    }

    /// One point per month, January first.
    pub fn chart(&mut self) -> Vec<ChartPoint> {
        MONTHS
            .iter()
            .map(|month| {
                let revenue = self.rng.gen_range(ranges::MONTHLY_REVENUE);
                let margin = self.rng.gen_range(ranges::PROFIT_MARGIN);
                let profit = (revenue as f64 * margin).floor() as u64;
                let customers = self.rng.gen_range(ranges::MONTHLY_CUSTOMERS);
                ChartPoint::new(month, revenue, profit, customers)
            })
            .collect()
    }

    pub fn orders(&mut self, today: NaiveDate) -> Vec<OrderRecord> {
        (0..self.order_count)
            .map(|i| {
                let age = self.rng.gen_range(ranges::ORDER_AGE_DAYS);
                let date = today.checked_sub_days(Days::new(age)).unwrap_or(today);
                let product = Product::ALL[self.rng.gen_range(0..Product::ALL.len())];
                let revenue = self.rng.gen_range(ranges::ORDER_REVENUE);
                let units = self.rng.gen_range(ranges::ORDER_UNITS);
                let status = OrderStatus::ALL[self.rng.gen_range(0..OrderStatus::ALL.len())];
                OrderRecord::new(i, date, product, revenue, units, status)
            })
            .collect()
    }
}

impl SnapshotSource for MockDataGenerator {
    fn generate(&mut self, today: NaiveDate) -> Result<Snapshot> {
        Ok(self.generate_at(today))
    }
}
