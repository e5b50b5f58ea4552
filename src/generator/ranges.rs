//! Sampling bounds for the mock generator.
//!
//! All ranges are half-open `[low, high)` and sampled uniformly.

use std::ops::Range;

// ============================================
// Metrics
// ============================================

pub const TOTAL_REVENUE: Range<u64> = 500_000..1_500_000;
pub const REVENUE_CHANGE_PCT: Range<f64> = -5.0..15.0;
pub const CONVERSION_RATE_PCT: Range<f64> = 1.0..6.0;
pub const CONVERSION_CHANGE_PCT: Range<f64> = -3.0..7.0;
pub const ACTIVE_USERS: Range<u64> = 10_000..60_000;
pub const USERS_CHANGE_PCT: Range<f64> = -3.0..12.0;
pub const TOTAL_ORDERS: Range<u64> = 2_000..12_000;
pub const ORDERS_CHANGE_PCT: Range<f64> = -5.0..20.0;

// ============================================
// Chart
// ============================================

pub const MONTHLY_REVENUE: Range<u64> = 50_000..150_000;

/// Profit as a fraction of the month's revenue (20-50% margin).
pub const PROFIT_MARGIN: Range<f64> = 0.2..0.5;

pub const MONTHLY_CUSTOMERS: Range<u64> = 500..1_500;

// ============================================
// Orders
// ============================================

/// Rows per generated table.
pub const DEFAULT_ORDER_COUNT: usize = 20;

/// Orders are dated up to this many days before generation (exclusive).
pub const ORDER_AGE_DAYS: Range<u64> = 0..30;

pub const ORDER_REVENUE: Range<u64> = 1_000..11_000;
pub const ORDER_UNITS: Range<u64> = 10..110;
