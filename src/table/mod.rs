//! Client-side tabular pipeline for the data table widget.
//!
//! - [`record`] - Typed cell values and the [`TableRecord`] trait rows implement
//! - [`column`] - Column descriptors (label, sortability, render transform)
//! - [`pipeline`] - Search filter, stable sort and pagination
//! - [`state`] - Caller-side table state and its transition rules

pub mod column;
pub mod pipeline;
pub mod record;
pub mod state;

pub use column::{find_column, Column, RenderFn};
pub use pipeline::{apply, filter_records, paginate, sort_records, SortDirection, SortSpec, TablePage};
pub use record::{CellValue, TableRecord};
pub use state::{TableState, PAGE_SIZE};
