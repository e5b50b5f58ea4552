//! Formatting helpers for the dashboard views.
//!
//! - [`format`] - Currency, percentage and integer formatting

mod format;

pub use format::{format_currency, format_number, format_percentage};
