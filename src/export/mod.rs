//! Report export seam.
//!
//! The dashboard hands every export request to an [`Exporter`]. The bundled
//! [`LogExporter`] only records the request; real PDF/CSV/XLS/PNG generation
//! attaches by implementing the trait.

mod exporter;
mod options;

pub use exporter::{ExportRequest, Exporter, LogExporter};
pub use options::{ExportFormat, ExportOptions, ReportRange};
